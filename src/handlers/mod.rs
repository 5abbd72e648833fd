//! Request handlers, one module per collection.

use mongodb::bson::Bson;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde::Serialize;

pub(crate) mod comment;
pub(crate) mod donated;
pub(crate) mod donation;
pub(crate) mod status;
pub(crate) mod testimonial;
pub(crate) mod user;
pub(crate) mod volunteer;

/// Insert acknowledgement, mirroring the driver's result shape on the wire.
#[derive(Debug, Serialize)]
pub(crate) struct InsertAck {
    pub(crate) acknowledged: bool,
    #[serde(rename = "insertedId")]
    pub(crate) inserted_id: Bson,
}

impl From<InsertOneResult> for InsertAck {
    fn from(result: InsertOneResult) -> Self {
        Self {
            acknowledged: true,
            inserted_id: result.inserted_id,
        }
    }
}

/// Update acknowledgement.
#[derive(Debug, Serialize)]
pub(crate) struct UpdateAck {
    pub(crate) acknowledged: bool,
    #[serde(rename = "matchedCount")]
    pub(crate) matched_count: u64,
    #[serde(rename = "modifiedCount")]
    pub(crate) modified_count: u64,
}

impl From<UpdateResult> for UpdateAck {
    fn from(result: UpdateResult) -> Self {
        Self {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        }
    }
}

/// Delete acknowledgement. A `deletedCount` of zero is a valid outcome, not
/// an error.
#[derive(Debug, Serialize)]
pub(crate) struct DeleteAck {
    pub(crate) acknowledged: bool,
    #[serde(rename = "deletedCount")]
    pub(crate) deleted_count: u64,
}

impl From<DeleteResult> for DeleteAck {
    fn from(result: DeleteResult) -> Self {
        Self {
            acknowledged: true,
            deleted_count: result.deleted_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn acks_use_the_driver_wire_field_names() {
        let ack = DeleteAck {
            acknowledged: true,
            deleted_count: 0,
        };
        assert_eq!(
            serde_json::to_value(&ack).unwrap(),
            json!({ "acknowledged": true, "deletedCount": 0 })
        );

        let ack = UpdateAck {
            acknowledged: true,
            matched_count: 1,
            modified_count: 1,
        };
        assert_eq!(
            serde_json::to_value(&ack).unwrap(),
            json!({ "acknowledged": true, "matchedCount": 1, "modifiedCount": 1 })
        );
    }
}
