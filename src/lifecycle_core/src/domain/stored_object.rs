use super::user_id::UserId;

/// One entry of a storage listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub name: String,
}

impl StoredObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A file owned by exactly one user, addressed as `<user_id>/<name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
    name: String,
    path: String,
}

impl ObjectRef {
    pub fn new(owner: &UserId, name: impl Into<String>) -> Self {
        let name = name.into();
        let path = format!("{owner}/{name}");
        Self { name, path }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Paths collected from one listing page, removed together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionBatch {
    objects: Vec<ObjectRef>,
}

impl DeletionBatch {
    /// Entries without a name are skipped.
    pub fn from_page(owner: &UserId, page: &[StoredObject]) -> Self {
        let objects = page
            .iter()
            .filter(|object| !object.name.is_empty())
            .map(|object| ObjectRef::new(owner, object.name.as_str()))
            .collect();

        Self { objects }
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn paths(&self) -> Vec<String> {
        self.objects
            .iter()
            .map(|object| object.path().to_owned())
            .collect()
    }
}
