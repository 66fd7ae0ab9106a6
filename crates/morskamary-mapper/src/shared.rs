//! Lock-guarded mapper for concurrent hosts

use crate::{CompetenceMapper, MapperError};
use morskamary_domain::traits::CompetenceRegistry;
use morskamary_domain::{Axis, Competence, CompetenceId, CredentialId, MicroCredential};
use std::sync::{Arc, Mutex, MutexGuard};

/// A [`CompetenceMapper`] behind a single mutex
///
/// Every call takes the lock once for its whole duration, so each add or
/// query observes a consistent registry. Clones share the same registries.
#[derive(Debug, Clone, Default)]
pub struct SharedMapper {
    inner: Arc<Mutex<CompetenceMapper>>,
}

impl SharedMapper {
    /// Wrap an existing mapper
    pub fn new(mapper: CompetenceMapper) -> Self {
        Self {
            inner: Arc::new(Mutex::new(mapper)),
        }
    }

    /// Run a closure with exclusive access to the mapper
    pub fn with<T>(&self, f: impl FnOnce(&mut CompetenceMapper) -> T) -> T {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, CompetenceMapper> {
        // Adds validate before mutating; a poisoned lock still guards a consistent registry.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CompetenceRegistry for SharedMapper {
    type Error = MapperError;

    fn add_competence(&mut self, competence: Competence) -> Result<CompetenceId, Self::Error> {
        self.lock().add_competence(competence)
    }

    fn add_credential(&mut self, credential: MicroCredential) -> Result<CredentialId, Self::Error> {
        self.lock().add_credential(credential)
    }

    fn get_competence(&self, id: &str) -> Result<Competence, Self::Error> {
        self.lock().get_competence(id)
    }

    fn get_credential(&self, id: &str) -> Result<MicroCredential, Self::Error> {
        self.lock().get_credential(id)
    }

    fn competences_by_axis(&self, axis: Axis) -> Vec<Competence> {
        self.lock().competences_by_axis(axis)
    }

    fn list_competences(&self) -> Vec<Competence> {
        self.lock().list_competences()
    }

    fn list_credentials(&self) -> Vec<MicroCredential> {
        self.lock().list_credentials()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_concurrent_adds() {
        let shared = SharedMapper::default();

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let mut handle = shared.clone();
                thread::spawn(move || {
                    for i in 0..10 {
                        let id = format!("C{}-{}", t, i);
                        let c = Competence::new(id, "skill", Axis::Marine, "DocA p.1").unwrap();
                        handle.add_competence(c).unwrap();
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(shared.list_competences().len(), 80);
        assert_eq!(shared.with(|m| m.competence_count()), 80);
    }

    #[test]
    fn test_duplicate_across_clones() {
        let mut a = SharedMapper::default();
        let mut b = a.clone();

        let c = Competence::new("C1", "skill", Axis::Oceanic, "DocA").unwrap();
        a.add_competence(c.clone()).unwrap();
        assert!(matches!(
            b.add_competence(c),
            Err(MapperError::DuplicateIdentifier { .. })
        ));
        assert_eq!(b.get_competence("C1").unwrap().axis, Axis::Oceanic);
    }
}
