//! Typed collection accessors over the Mongo database handle.

use mongodb::{bson::doc, options::IndexOptions, Client, Collection, Database, IndexModel};

use crate::models::{Comment, DonatedRecord, Donation, Testimonial, User, Volunteer};

/// The persistence handle injected into every handler. Constructed once at
/// startup and dropped at shutdown, releasing the driver's connection pool.
#[derive(Debug, Clone)]
pub(crate) struct Store {
    db: Database,
}

impl Store {
    /// Attempt to connect and verify the connection with a ping.
    pub(crate) async fn connect(uri: &str, database: &str) -> mongodb::error::Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(database);
        db.run_command(doc! { "ping": 1 }, None).await?;
        tracing::info!("connected to MongoDB database {}", database);

        let store = Self { db };
        store.ensure_indexes().await?;
        Ok(store)
    }

    /// Email uniqueness is backed by an index, so two concurrent
    /// registrations cannot both insert between check and write.
    async fn ensure_indexes(&self) -> mongodb::error::Result<()> {
        let email_unique = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.users().create_index(email_unique, None).await?;
        Ok(())
    }

    pub(crate) fn users(&self) -> Collection<User> {
        self.db.collection("users")
    }

    pub(crate) fn donations(&self) -> Collection<Donation> {
        self.db.collection("donation")
    }

    pub(crate) fn donated(&self) -> Collection<DonatedRecord> {
        self.db.collection("donated")
    }

    pub(crate) fn comments(&self) -> Collection<Comment> {
        self.db.collection("comments")
    }

    pub(crate) fn testimonials(&self) -> Collection<Testimonial> {
        self.db.collection("testimonials")
    }

    pub(crate) fn volunteers(&self) -> Collection<Volunteer> {
        self.db.collection("volunteers")
    }
}
