//! Document models, one struct per collection.
//!
//! Ids are `Option<ObjectId>` and skipped on serialization when absent, so
//! inserts let the database assign them.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// User model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<ObjectId>,
    pub(crate) name: String,
    pub(crate) email: String,
    /// The password in bcrypt-hashed form, as represented in the database
    pub(crate) password: String,
    #[serde(rename = "totalDonated", default)]
    pub(crate) total_donated: f64,
}

/// A donation campaign listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Donation {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<ObjectId>,
    pub(crate) image: String,
    pub(crate) category: String,
    pub(crate) title: String,
    pub(crate) amount: f64,
    pub(crate) description: String,
    /// Absent until the first review is appended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) reviews: Option<Vec<Review>>,
}

/// A single entry in a donation's review list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Review {
    pub(crate) text: String,
    pub(crate) name: String,
    pub(crate) date: DateTime<Utc>,
}

/// A completed-donation history entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct DonatedRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<ObjectId>,
    pub(crate) email: String,
    pub(crate) title: String,
    pub(crate) category: String,
    pub(crate) amount: f64,
    pub(crate) date: DateTime<Utc>,
}

/// A community comment. The date is client-supplied display text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Comment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<ObjectId>,
    pub(crate) name: String,
    pub(crate) heading: String,
    pub(crate) comment: String,
    pub(crate) date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Testimonial {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<ObjectId>,
    pub(crate) name: String,
    pub(crate) image: String,
    pub(crate) amount: f64,
    pub(crate) description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Volunteer {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<ObjectId>,
    pub(crate) name: String,
    pub(crate) email: String,
    #[serde(rename = "phoneNumber")]
    pub(crate) phone_number: String,
    pub(crate) location: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_serializes_without_absent_id_and_with_wire_field_names() {
        let user = User {
            id: None,
            name: "A".to_owned(),
            email: "a@x.com".to_owned(),
            password: "$2b$10$hash".to_owned(),
            total_donated: 0.0,
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "A",
                "email": "a@x.com",
                "password": "$2b$10$hash",
                "totalDonated": 0.0,
            })
        );
    }

    #[test]
    fn user_without_total_defaults_to_zero() {
        let user: User = serde_json::from_value(json!({
            "name": "A",
            "email": "a@x.com",
            "password": "$2b$10$hash",
        }))
        .unwrap();
        assert_eq!(user.total_donated, 0.0);
    }

    #[test]
    fn donation_reviews_field_is_optional() {
        let donation: Donation = serde_json::from_value(json!({
            "image": "i.png",
            "category": "health",
            "title": "Clean water",
            "amount": 100.0,
            "description": "wells",
        }))
        .unwrap();
        assert!(donation.reviews.is_none());

        let value = serde_json::to_value(&donation).unwrap();
        assert!(value.get("reviews").is_none());
    }

    #[test]
    fn volunteer_uses_camel_case_phone_number() {
        let volunteer = Volunteer {
            id: None,
            name: "V".to_owned(),
            email: "v@x.com".to_owned(),
            phone_number: "123".to_owned(),
            location: "Dhaka".to_owned(),
        };
        let value = serde_json::to_value(&volunteer).unwrap();
        assert_eq!(value["phoneNumber"], "123");
    }
}
