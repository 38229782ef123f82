pub mod hashmap_identity_store;
pub mod hashmap_object_storage;

pub use hashmap_identity_store::HashMapIdentityStore;
pub use hashmap_object_storage::HashMapObjectStorage;
