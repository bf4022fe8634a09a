//! # Employee Store
//!
//! Authoritative in-memory map of employee profiles, keyed by a
//! store-generated identifier. There is no delete and no index by email.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

use super::error::{StoreError, StoreResult};
use crate::models::{Employee, EmployeeUpdate};

const KIND: &str = "Employee";

/// Shared handle to the employee map. Clones see the same records.
#[derive(Debug, Clone, Default)]
pub struct EmployeeStore {
    records: Arc<Mutex<HashMap<String, Employee>>>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, HashMap<String, Employee>>> {
        self.records.lock().map_err(|_| StoreError::Poisoned(KIND))
    }

    /// Store a new profile and return its fresh identifier
    pub fn create(&self, employee: Employee) -> StoreResult<String> {
        let id = Uuid::new_v4().to_string();
        self.lock()?.insert(id.clone(), employee);
        tracing::debug!(employee_id = %id, "Employee created");
        Ok(id)
    }

    /// Fetch a profile by identifier
    pub fn get(&self, id: &str) -> StoreResult<Employee> {
        self.lock()?
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(KIND, id))
    }

    /// Merge the supplied fields into an existing profile and return the result
    pub fn update(&self, id: &str, update: EmployeeUpdate) -> StoreResult<Employee> {
        let mut records = self.lock()?;
        let employee = records
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(KIND, id))?;
        employee.apply(update);
        tracing::debug!(employee_id = %id, "Employee updated");
        Ok(employee.clone())
    }

    pub fn len(&self) -> usize {
        self.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
