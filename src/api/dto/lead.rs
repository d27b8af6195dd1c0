use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::models::lead::Lead;

#[derive(Debug, Serialize, ToSchema)]
pub struct LeadDTO {
    #[schema(examples("1"))]
    id: String,
    #[schema(examples("Zezinho"))]
    name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LeadsDTO {
    leads: Vec<LeadDTO>,
}

impl From<Lead> for LeadDTO {
    fn from(val: Lead) -> Self {
        LeadDTO {
            id: val.id,
            name: val.name,
        }
    }
}

impl From<Vec<Lead>> for LeadsDTO {
    fn from(leads: Vec<Lead>) -> Self {
        LeadsDTO {
            leads: leads.into_iter().map(LeadDTO::from).collect(),
        }
    }
}
