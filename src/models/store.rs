use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Store {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub phone: String,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct StoresResponse {
    pub stores: Vec<Store>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct StoreResponse {
    pub store: Store,
}
