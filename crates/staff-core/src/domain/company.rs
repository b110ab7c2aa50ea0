//! Company domain entity

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Company {
    pub id: i32,

    #[validate(length(min = 1, max = 120, message = "Company name is required"))]
    pub company_name: String,

    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_name_required() {
        let company = Company {
            id: 1,
            company_name: String::new(),
            location: "Jakarta".to_string(),
        };
        assert!(company.validate().is_err());
    }
}
