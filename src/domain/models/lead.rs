#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub id: String,
    pub name: String,
}

impl Lead {
    fn new(id: &str, name: &str) -> Self {
        Lead {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    /// The leads served by `GET /leads`. Not persisted; built on every call.
    pub fn fixtures() -> Vec<Lead> {
        vec![
            Lead::new("1", "Zezinho"),
            Lead::new("2", "Mateusinho"),
            Lead::new("3", "Carlinhos"),
        ]
    }
}
