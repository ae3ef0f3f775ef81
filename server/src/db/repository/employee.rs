//! Employee Repository

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::RepoResult;
use crate::db::filter::EmployeeFilter;
use crate::db::models::{Employee, EmployeeCreate};

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new directory record
    pub async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        let now = Utc::now();
        let employee = Employee {
            id: Uuid::new_v4().to_string(),
            full_name: data.full_name,
            date_of_birth: data.date_of_birth,
            email: data.email,
            department: data.department,
            phone_number: data.phone_number,
            designation: data.designation,
            gender: data.gender,
            photo_path: data.photo_path,
            photo_original_name: data.photo_original_name,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"INSERT INTO employees
                (id, full_name, date_of_birth, email, department, phone_number,
                 designation, gender, photo_path, photo_original_name,
                 created_at, updated_at)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)"#,
        )
        .bind(&employee.id)
        .bind(&employee.full_name)
        .bind(employee.date_of_birth)
        .bind(&employee.email)
        .bind(&employee.department)
        .bind(&employee.phone_number)
        .bind(&employee.designation)
        .bind(&employee.gender)
        .bind(&employee.photo_path)
        .bind(&employee.photo_original_name)
        .bind(employee.created_at)
        .bind(employee.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(employee)
    }

    /// List records matching the filter, most recently created first
    ///
    /// The rowid tie-breaker keeps insertion order stable when timestamps
    /// collide.
    pub async fn list(&self, filter: &EmployeeFilter) -> RepoResult<Vec<Employee>> {
        let (where_clause, params) = filter.where_clause();
        let sql = format!(
            "SELECT * FROM employees WHERE {} ORDER BY created_at DESC, rowid DESC",
            where_clause
        );

        let mut query = sqlx::query_as::<_, Employee>(&sql);
        for param in params {
            query = query.bind(param);
        }

        let employees = query.fetch_all(&self.pool).await?;
        Ok(employees)
    }
}
