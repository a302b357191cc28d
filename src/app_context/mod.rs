use crate::map::locations::LocationProvider;
use crate::storage::interface::IRoundStorage;
use crate::storage::rounds::HashMapRoundsStorage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext<RS: IRoundStorage> {
    pub rounds: RS,
    pub locations: Arc<dyn LocationProvider>,
}

pub struct RequestContext {
    pub public_id: String,
}

pub fn init(locations: Arc<dyn LocationProvider>) -> AppContext<HashMapRoundsStorage> {
    AppContext {
        rounds: HashMapRoundsStorage::default(),
        locations,
    }
}
