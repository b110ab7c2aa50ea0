// ============================================================================
// Staff Core - Employee Service
// File: crates/staff-core/src/services/employee_service.rs
// ============================================================================
//! Employee CRUD flows and the partial-update reconciler.

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{error, info, warn};
use validator::Validate;

use crate::domain::{Company, Employee, EmployeeRecord, NewEmployee};
use crate::error::DomainError;
use crate::repositories::{CompanyRepository, EmployeeRepository, UnitOfWork, UnitOfWorkFactory};

/// Full payload for create and replace operations.
#[derive(Debug, Clone)]
pub struct CreateEmployee {
    pub name: String,
    pub email: String,
    pub designation: String,
    pub salary: Decimal,
    pub company_name: String,
}

/// Sparse field changes for a partial update.
///
/// The closed set of fields below is the whole update surface; unknown JSON
/// keys are dropped by the decoder and never reach the reconciler. `company_name`
/// reassigns the employee to an existing company, it is never copied onto the
/// employee itself. `location` rewrites the current company's location and is
/// only accepted when the resulting (company_name, location) pair already
/// exists as a company row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub designation: Option<String>,
    pub salary: Option<Decimal>,
    pub company_name: Option<String>,
    pub location: Option<String>,
}

pub struct EmployeeService<E, C, U>
where
    E: EmployeeRepository,
    C: CompanyRepository,
    U: UnitOfWorkFactory,
{
    employees: Arc<E>,
    companies: Arc<C>,
    gateway: Arc<U>,
}

impl<E, C, U> EmployeeService<E, C, U>
where
    E: EmployeeRepository,
    C: CompanyRepository,
    U: UnitOfWorkFactory,
{
    pub fn new(employees: Arc<E>, companies: Arc<C>, gateway: Arc<U>) -> Self {
        Self {
            employees,
            companies,
            gateway,
        }
    }

    pub async fn list(&self) -> Result<Vec<EmployeeRecord>, DomainError> {
        let employees = self.employees.find_all().await?;
        let companies: HashMap<i32, Company> = self
            .companies
            .find_all()
            .await?
            .into_iter()
            .map(|company| (company.id, company))
            .collect();

        let mut records = Vec::with_capacity(employees.len());
        for employee in employees {
            let company = companies.get(&employee.company_id).cloned().ok_or_else(|| {
                DomainError::DatabaseError(format!(
                    "employee {} references missing company {}",
                    employee.id, employee.company_id
                ))
            })?;
            records.push(EmployeeRecord::compose(employee, company));
        }
        Ok(records)
    }

    pub async fn get(&self, id: i32) -> Result<EmployeeRecord, DomainError> {
        let employee = self
            .employees
            .find_by_id(id)
            .await?
            .ok_or(DomainError::EmployeeNotFound)?;
        let company = self.company_of(&employee).await?;
        Ok(EmployeeRecord::compose(employee, company))
    }

    pub async fn create(&self, input: CreateEmployee) -> Result<EmployeeRecord, DomainError> {
        let company = self
            .companies
            .find_by_name(input.company_name.trim())
            .await?
            .ok_or_else(|| DomainError::CompanyNotFoundByName(input.company_name.clone()))?;

        // Fast-path check; the unique index on email is the authoritative
        // guard under concurrent creates.
        if self.employees.find_by_email(&input.email).await?.is_some() {
            warn!("Create employee failed: email already exists: {}", input.email);
            return Err(DomainError::EmailAlreadyExists(input.email));
        }

        let new_employee = NewEmployee::new(
            input.name,
            input.email,
            input.designation,
            input.salary,
            company.id,
        )
        .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        let employee = self.employees.create(&new_employee).await?;
        info!("Employee created: {} ({})", employee.email, employee.id);
        Ok(EmployeeRecord::compose(employee, company))
    }

    /// PUT semantics: every field is required and overwritten.
    pub async fn replace(
        &self,
        id: i32,
        input: CreateEmployee,
    ) -> Result<EmployeeRecord, DomainError> {
        let existing = self
            .employees
            .find_by_id(id)
            .await?
            .ok_or(DomainError::EmployeeNotFound)?;

        let company = self
            .companies
            .find_by_name(input.company_name.trim())
            .await?
            .ok_or_else(|| DomainError::CompanyNotFoundByName(input.company_name.clone()))?;

        let employee = Employee {
            id: existing.id,
            name: input.name.trim().to_string(),
            email: input.email.trim().to_string(),
            designation: input.designation.trim().to_string(),
            salary: input.salary,
            company_id: company.id,
        };
        employee
            .validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        let employee = self.employees.update(&employee).await?;
        info!("Employee replaced: {}", employee.id);
        Ok(EmployeeRecord::compose(employee, company))
    }

    /// Applies a sparse set of field changes to one employee as a single
    /// atomic operation, enforcing the cross-entity rules between employees
    /// and companies. Ordering matters: the email uniqueness check runs before
    /// any mutation, company reassignment precedes the location rule, and the
    /// remaining field copies come last.
    pub async fn reconcile(
        &self,
        id: i32,
        changes: EmployeeChanges,
    ) -> Result<EmployeeRecord, DomainError> {
        let mut uow = self.gateway.begin().await?;

        match self.apply_changes(uow.as_mut(), id, changes).await {
            Ok(record) => {
                info!("Employee reconciled: {}", id);
                Ok(record)
            }
            Err(err) => {
                warn!("Reconcile of employee {} failed: {}", id, err);
                if let Err(rollback_err) = uow.rollback().await {
                    error!("Rollback after failed reconcile: {}", rollback_err);
                }
                Err(err)
            }
        }
    }

    async fn apply_changes(
        &self,
        uow: &mut dyn UnitOfWork,
        id: i32,
        changes: EmployeeChanges,
    ) -> Result<EmployeeRecord, DomainError> {
        // 1. The employee must exist.
        let mut employee = uow
            .employee_by_id(id)
            .await?
            .ok_or(DomainError::EmployeeNotFound)?;

        // 2. Email uniqueness, read-only: another employee holding the
        //    candidate email rejects the whole request before any write.
        if let Some(email) = changes.email.as_deref() {
            if let Some(other) = uow.employee_by_email(email).await? {
                if other.id != employee.id {
                    return Err(DomainError::EmailAlreadyExists(email.to_string()));
                }
            }
        }

        // 3. Reassignment by company name. The name is resolved to a row and
        //    never copied onto the employee.
        let mut company = match changes.company_name.as_deref() {
            Some(name) => {
                let found = uow
                    .company_by_name(name)
                    .await?
                    .ok_or_else(|| DomainError::CompanyNotFoundByName(name.to_string()))?;
                employee.company_id = found.id;
                Some(found)
            }
            None => None,
        };

        // 4. Location rule: only accepted when some company row already pairs
        //    the current company's name with the candidate location. The write
        //    lands on the employee's current company row and is observed by
        //    every employee of that company.
        if let Some(location) = changes.location.as_deref() {
            let current = match company.take() {
                Some(found) => found,
                None => uow
                    .company_by_id(employee.company_id)
                    .await?
                    .ok_or(DomainError::EmployeeWithoutCompany)?,
            };

            uow.company_by_name_and_location(&current.company_name, location)
                .await?
                .ok_or_else(|| DomainError::CompanyLocationNotFound {
                    company_name: current.company_name.clone(),
                    location: location.to_string(),
                })?;

            uow.store_company_location(current.id, location).await?;
            company = Some(Company {
                location: location.to_string(),
                ..current
            });
        }

        // 5. Remaining field copies, unconditional. Email was already cleared
        //    in step 2 and is only written here.
        if let Some(name) = changes.name {
            employee.name = name;
        }
        if let Some(email) = changes.email {
            employee.email = email;
        }
        if let Some(designation) = changes.designation {
            employee.designation = designation;
        }
        if let Some(salary) = changes.salary {
            employee.salary = salary;
        }
        uow.store_employee(&employee).await?;

        // 6. One atomic commit for both entities.
        uow.commit().await?;

        // 7. Composed view with the current company nested.
        let company = match company {
            Some(company) => company,
            None => self.company_of(&employee).await?,
        };
        Ok(EmployeeRecord::compose(employee, company))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DomainError> {
        if !self.employees.delete(id).await? {
            return Err(DomainError::EmployeeNotFound);
        }
        info!("Employee deleted: {}", id);
        Ok(())
    }

    async fn company_of(&self, employee: &Employee) -> Result<Company, DomainError> {
        self.companies
            .find_by_id(employee.company_id)
            .await?
            .ok_or_else(|| {
                DomainError::DatabaseError(format!(
                    "employee {} references missing company {}",
                    employee.id, employee.company_id
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Db {
        companies: Vec<Company>,
        employees: Vec<Employee>,
        next_id: i32,
    }

    /// Shared in-memory store acting as both repositories and the unit-of-work
    /// factory. Writes issued through a unit of work stay staged until commit.
    #[derive(Clone, Default)]
    struct InMemoryStore {
        db: Arc<Mutex<Db>>,
    }

    struct InMemoryUow {
        db: Arc<Mutex<Db>>,
        staged_employees: Vec<Employee>,
        staged_locations: Vec<(i32, String)>,
    }

    #[async_trait]
    impl UnitOfWork for InMemoryUow {
        async fn employee_by_id(&mut self, id: i32) -> Result<Option<Employee>, DomainError> {
            let db = self.db.lock().unwrap();
            Ok(db.employees.iter().find(|e| e.id == id).cloned())
        }

        async fn employee_by_email(
            &mut self,
            email: &str,
        ) -> Result<Option<Employee>, DomainError> {
            let db = self.db.lock().unwrap();
            Ok(db.employees.iter().find(|e| e.email == email).cloned())
        }

        async fn company_by_id(&mut self, id: i32) -> Result<Option<Company>, DomainError> {
            let db = self.db.lock().unwrap();
            Ok(db.companies.iter().find(|c| c.id == id).cloned())
        }

        async fn company_by_name(&mut self, name: &str) -> Result<Option<Company>, DomainError> {
            let db = self.db.lock().unwrap();
            Ok(db.companies.iter().find(|c| c.company_name == name).cloned())
        }

        async fn company_by_name_and_location(
            &mut self,
            company_name: &str,
            location: &str,
        ) -> Result<Option<Company>, DomainError> {
            let db = self.db.lock().unwrap();
            Ok(db
                .companies
                .iter()
                .find(|c| c.company_name == company_name && c.location == location)
                .cloned())
        }

        async fn store_employee(&mut self, employee: &Employee) -> Result<(), DomainError> {
            self.staged_employees.push(employee.clone());
            Ok(())
        }

        async fn store_company_location(
            &mut self,
            company_id: i32,
            location: &str,
        ) -> Result<(), DomainError> {
            self.staged_locations.push((company_id, location.to_string()));
            Ok(())
        }

        async fn commit(&mut self) -> Result<(), DomainError> {
            let mut db = self.db.lock().unwrap();
            for (company_id, location) in self.staged_locations.drain(..) {
                if let Some(company) = db.companies.iter_mut().find(|c| c.id == company_id) {
                    company.location = location;
                }
            }
            for staged in self.staged_employees.drain(..) {
                if let Some(employee) = db.employees.iter_mut().find(|e| e.id == staged.id) {
                    *employee = staged;
                }
            }
            Ok(())
        }

        async fn rollback(&mut self) -> Result<(), DomainError> {
            self.staged_employees.clear();
            self.staged_locations.clear();
            Ok(())
        }
    }

    #[async_trait]
    impl UnitOfWorkFactory for InMemoryStore {
        async fn begin(&self) -> Result<Box<dyn UnitOfWork>, DomainError> {
            Ok(Box::new(InMemoryUow {
                db: self.db.clone(),
                staged_employees: Vec::new(),
                staged_locations: Vec::new(),
            }))
        }
    }

    #[async_trait]
    impl CompanyRepository for InMemoryStore {
        async fn find_all(&self) -> Result<Vec<Company>, DomainError> {
            Ok(self.db.lock().unwrap().companies.clone())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Company>, DomainError> {
            let db = self.db.lock().unwrap();
            Ok(db.companies.iter().find(|c| c.id == id).cloned())
        }

        async fn find_by_name(&self, name: &str) -> Result<Option<Company>, DomainError> {
            let db = self.db.lock().unwrap();
            Ok(db.companies.iter().find(|c| c.company_name == name).cloned())
        }

        async fn create(
            &self,
            company_name: &str,
            location: &str,
        ) -> Result<Company, DomainError> {
            let mut db = self.db.lock().unwrap();
            db.next_id += 1;
            let company = Company {
                id: db.next_id,
                company_name: company_name.to_string(),
                location: location.to_string(),
            };
            db.companies.push(company.clone());
            Ok(company)
        }

        async fn delete(&self, id: i32) -> Result<bool, DomainError> {
            let mut db = self.db.lock().unwrap();
            let before = db.companies.len();
            db.companies.retain(|c| c.id != id);
            Ok(db.companies.len() < before)
        }
    }

    #[async_trait]
    impl EmployeeRepository for InMemoryStore {
        async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
            Ok(self.db.lock().unwrap().employees.clone())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, DomainError> {
            let db = self.db.lock().unwrap();
            Ok(db.employees.iter().find(|e| e.id == id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError> {
            let db = self.db.lock().unwrap();
            Ok(db.employees.iter().find(|e| e.email == email).cloned())
        }

        async fn create(&self, employee: &NewEmployee) -> Result<Employee, DomainError> {
            let mut db = self.db.lock().unwrap();
            if db.employees.iter().any(|e| e.email == employee.email) {
                return Err(DomainError::EmailAlreadyExists(employee.email.clone()));
            }
            db.next_id += 1;
            let employee = Employee {
                id: db.next_id,
                name: employee.name.clone(),
                email: employee.email.clone(),
                designation: employee.designation.clone(),
                salary: employee.salary,
                company_id: employee.company_id,
            };
            db.employees.push(employee.clone());
            Ok(employee)
        }

        async fn update(&self, employee: &Employee) -> Result<Employee, DomainError> {
            let mut db = self.db.lock().unwrap();
            match db.employees.iter_mut().find(|e| e.id == employee.id) {
                Some(row) => {
                    *row = employee.clone();
                    Ok(employee.clone())
                }
                None => Err(DomainError::EmployeeNotFound),
            }
        }

        async fn delete(&self, id: i32) -> Result<bool, DomainError> {
            let mut db = self.db.lock().unwrap();
            let before = db.employees.len();
            db.employees.retain(|e| e.id != id);
            Ok(db.employees.len() < before)
        }

        async fn count_by_company(&self, company_id: i32) -> Result<i64, DomainError> {
            let db = self.db.lock().unwrap();
            Ok(db.employees.iter().filter(|e| e.company_id == company_id).count() as i64)
        }
    }

    type Service = EmployeeService<InMemoryStore, InMemoryStore, InMemoryStore>;

    fn service(store: &InMemoryStore) -> Service {
        EmployeeService::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
        )
    }

    fn seed_company(store: &InMemoryStore, id: i32, name: &str, location: &str) {
        let mut db = store.db.lock().unwrap();
        db.companies.push(Company {
            id,
            company_name: name.to_string(),
            location: location.to_string(),
        });
        db.next_id = db.next_id.max(id);
    }

    fn seed_employee(store: &InMemoryStore, id: i32, email: &str, company_id: i32) {
        let mut db = store.db.lock().unwrap();
        db.employees.push(Employee {
            id,
            name: format!("Employee {}", id),
            email: email.to_string(),
            designation: "Engineer".to_string(),
            salary: Decimal::new(750_000, 2),
            company_id,
        });
        db.next_id = db.next_id.max(id);
    }

    fn employee_snapshot(store: &InMemoryStore, id: i32) -> Employee {
        let db = store.db.lock().unwrap();
        db.employees.iter().find(|e| e.id == id).cloned().unwrap()
    }

    #[tokio::test]
    async fn test_empty_changes_is_noop() {
        let store = InMemoryStore::default();
        seed_company(&store, 1, "Acme", "NY");
        seed_employee(&store, 1, "a@x.com", 1);
        let before = employee_snapshot(&store, 1);

        let record = service(&store)
            .reconcile(1, EmployeeChanges::default())
            .await
            .unwrap();

        assert_eq!(record.email, "a@x.com");
        assert_eq!(record.company.company_name, "Acme");
        assert_eq!(employee_snapshot(&store, 1), before);
    }

    #[tokio::test]
    async fn test_missing_employee() {
        let store = InMemoryStore::default();
        seed_company(&store, 1, "Acme", "NY");

        let result = service(&store).reconcile(99, EmployeeChanges::default()).await;
        assert!(matches!(result, Err(DomainError::EmployeeNotFound)));
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts_and_alters_nothing() {
        let store = InMemoryStore::default();
        seed_company(&store, 1, "Acme", "NY");
        seed_employee(&store, 1, "a@x.com", 1);
        seed_employee(&store, 2, "b@x.com", 1);

        let changes = EmployeeChanges {
            email: Some("a@x.com".to_string()),
            name: Some("Renamed".to_string()),
            ..Default::default()
        };
        let result = service(&store).reconcile(2, changes).await;

        assert!(matches!(
            result,
            Err(DomainError::EmailAlreadyExists(email)) if email == "a@x.com"
        ));
        let unchanged = employee_snapshot(&store, 2);
        assert_eq!(unchanged.email, "b@x.com");
        assert_eq!(unchanged.name, "Employee 2");
    }

    #[tokio::test]
    async fn test_own_email_is_not_a_conflict() {
        let store = InMemoryStore::default();
        seed_company(&store, 1, "Acme", "NY");
        seed_employee(&store, 1, "a@x.com", 1);

        let changes = EmployeeChanges {
            email: Some("a@x.com".to_string()),
            ..Default::default()
        };
        assert!(service(&store).reconcile(1, changes).await.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_company_fails_and_alters_nothing() {
        let store = InMemoryStore::default();
        seed_company(&store, 1, "Acme", "NY");
        seed_employee(&store, 1, "a@x.com", 1);

        let changes = EmployeeChanges {
            company_name: Some("Globex".to_string()),
            name: Some("Renamed".to_string()),
            ..Default::default()
        };
        let result = service(&store).reconcile(1, changes).await;

        assert!(matches!(
            result,
            Err(DomainError::CompanyNotFoundByName(name)) if name == "Globex"
        ));
        assert_eq!(employee_snapshot(&store, 1).name, "Employee 1");
    }

    #[tokio::test]
    async fn test_reassignment_swaps_company_in_view() {
        let store = InMemoryStore::default();
        seed_company(&store, 1, "Acme", "NY");
        seed_company(&store, 2, "Globex", "SF");
        seed_employee(&store, 1, "a@x.com", 1);

        let changes = EmployeeChanges {
            company_name: Some("Globex".to_string()),
            ..Default::default()
        };
        let record = service(&store).reconcile(1, changes).await.unwrap();

        assert_eq!(record.company.id, 2);
        assert_eq!(record.company.company_name, "Globex");
        assert_eq!(record.company.location, "SF");
        assert_eq!(employee_snapshot(&store, 1).company_id, 2);

        // A later fetch shows Globex's own location, not Acme's.
        let fetched = service(&store).get(1).await.unwrap();
        assert_eq!(fetched.company.location, "SF");
    }

    #[tokio::test]
    async fn test_location_change_to_known_pair() {
        let store = InMemoryStore::default();
        seed_company(&store, 1, "Acme", "NY");
        seed_company(&store, 2, "Acme", "LA");
        seed_employee(&store, 1, "a@x.com", 1);
        seed_employee(&store, 2, "b@x.com", 1);

        let changes = EmployeeChanges {
            location: Some("LA".to_string()),
            ..Default::default()
        };
        let record = service(&store).reconcile(1, changes).await.unwrap();
        assert_eq!(record.company.location, "LA");

        // The shared company row moved, so the second employee observes it too.
        let coworker = service(&store).get(2).await.unwrap();
        assert_eq!(coworker.company.location, "LA");
    }

    #[tokio::test]
    async fn test_location_change_to_unknown_pair() {
        let store = InMemoryStore::default();
        seed_company(&store, 1, "Acme", "NY");
        seed_company(&store, 2, "Acme", "LA");
        seed_employee(&store, 1, "a@x.com", 1);

        let changes = EmployeeChanges {
            location: Some("SF".to_string()),
            name: Some("Renamed".to_string()),
            ..Default::default()
        };
        let result = service(&store).reconcile(1, changes).await;

        assert!(matches!(
            result,
            Err(DomainError::CompanyLocationNotFound { company_name, location })
                if company_name == "Acme" && location == "SF"
        ));
        // Nothing was committed, neither the company nor the name change.
        let db = store.db.lock().unwrap();
        assert_eq!(db.companies.iter().find(|c| c.id == 1).unwrap().location, "NY");
        drop(db);
        assert_eq!(employee_snapshot(&store, 1).name, "Employee 1");
    }

    #[tokio::test]
    async fn test_reassignment_then_location_uses_new_company() {
        let store = InMemoryStore::default();
        seed_company(&store, 1, "Acme", "NY");
        seed_company(&store, 2, "Globex", "SF");
        seed_company(&store, 3, "Globex", "Austin");
        seed_employee(&store, 1, "a@x.com", 1);

        let changes = EmployeeChanges {
            company_name: Some("Globex".to_string()),
            location: Some("Austin".to_string()),
            ..Default::default()
        };
        let record = service(&store).reconcile(1, changes).await.unwrap();

        assert_eq!(record.company.company_name, "Globex");
        assert_eq!(record.company.location, "Austin");
        // Acme was left alone.
        let db = store.db.lock().unwrap();
        assert_eq!(db.companies.iter().find(|c| c.id == 1).unwrap().location, "NY");
    }

    #[tokio::test]
    async fn test_generic_field_copy() {
        let store = InMemoryStore::default();
        seed_company(&store, 1, "Acme", "NY");
        seed_employee(&store, 1, "a@x.com", 1);

        let changes = EmployeeChanges {
            name: Some("Siti Rahma".to_string()),
            designation: Some("Principal Engineer".to_string()),
            salary: Some(Decimal::new(990_000, 2)),
            ..Default::default()
        };
        let record = service(&store).reconcile(1, changes).await.unwrap();

        assert_eq!(record.name, "Siti Rahma");
        assert_eq!(record.designation, "Principal Engineer");
        assert_eq!(record.salary, Decimal::new(990_000, 2));
        assert_eq!(record.email, "a@x.com");
    }

    #[test]
    fn test_unknown_keys_are_dropped_by_the_decoder() {
        let changes: EmployeeChanges = serde_json::from_value(serde_json::json!({
            "name": "Siti",
            "badge_color": "green",
            "id": 999
        }))
        .unwrap();

        assert_eq!(changes.name.as_deref(), Some("Siti"));
        assert!(changes.email.is_none());
        assert!(changes.location.is_none());
    }

    #[tokio::test]
    async fn test_create_against_unknown_company() {
        let store = InMemoryStore::default();

        let result = service(&store)
            .create(CreateEmployee {
                name: "Budi".to_string(),
                email: "budi@x.com".to_string(),
                designation: "Engineer".to_string(),
                salary: Decimal::new(500_000, 2),
                company_name: "Acme".to_string(),
            })
            .await;

        assert!(matches!(result, Err(DomainError::CompanyNotFoundByName(_))));
    }

    #[tokio::test]
    async fn test_create_with_duplicate_email() {
        let store = InMemoryStore::default();
        seed_company(&store, 1, "Acme", "NY");
        seed_employee(&store, 1, "budi@x.com", 1);

        let result = service(&store)
            .create(CreateEmployee {
                name: "Budi".to_string(),
                email: "budi@x.com".to_string(),
                designation: "Engineer".to_string(),
                salary: Decimal::new(500_000, 2),
                company_name: "Acme".to_string(),
            })
            .await;

        assert!(matches!(result, Err(DomainError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_replace_overwrites_every_field() {
        let store = InMemoryStore::default();
        seed_company(&store, 1, "Acme", "NY");
        seed_company(&store, 2, "Globex", "SF");
        seed_employee(&store, 1, "a@x.com", 1);

        let record = service(&store)
            .replace(
                1,
                CreateEmployee {
                    name: "Siti".to_string(),
                    email: "siti@x.com".to_string(),
                    designation: "Manager".to_string(),
                    salary: Decimal::new(1_200_000, 2),
                    company_name: "Globex".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(record.email, "siti@x.com");
        assert_eq!(record.company.id, 2);
    }

    #[tokio::test]
    async fn test_delete_missing_employee() {
        let store = InMemoryStore::default();
        let result = service(&store).delete(7).await;
        assert!(matches!(result, Err(DomainError::EmployeeNotFound)));
    }
}
