use crate::shared::{contains_ci, Searchable};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn code(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "관리자",
            Role::User => "일반",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Portal account. `position` may be empty for accounts without a title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub role: Role,
}

impl User {
    pub fn from_dto(dto: &UserDto) -> Self {
        User {
            id: Uuid::new_v4().to_string(),
            name: dto.name.clone(),
            email: dto.email.clone(),
            department: dto.department.clone(),
            position: dto.position.clone(),
            role: dto.role(),
        }
    }

    /// Overwrite the editable fields from the admin form.
    pub fn apply_dto(&mut self, dto: &UserDto) {
        self.name = dto.name.clone();
        self.email = dto.email.clone();
        self.department = dto.department.clone();
        self.position = dto.position.clone();
        self.role = dto.role();
    }
}

impl Searchable for User {
    fn matches_query(&self, query: &str) -> bool {
        contains_ci(&self.name, query)
            || contains_ci(&self.email, query)
            || contains_ci(&self.department, query)
    }
}

/// Payload of the admin "사용자 추가/수정" form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub role_is_admin: bool,
}

impl UserDto {
    pub fn role(&self) -> Role {
        if self.role_is_admin {
            Role::Admin
        } else {
            Role::User
        }
    }

    /// Name and email are the only required fields.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_dto_requires_name_and_email() {
        let mut dto = UserDto {
            name: "김철수".into(),
            email: "kim.cs@cushwake.com".into(),
            ..Default::default()
        };
        assert!(dto.is_valid());
        dto.email = "  ".into();
        assert!(!dto.is_valid());
    }

    #[test]
    fn user_search_covers_name_email_and_department() {
        let users = crate::seed::users();
        let noel = &users[0];
        assert!(noel.matches_query("noel"));
        assert!(noel.matches_query("NOEL.KIM"));
        assert!(noel.matches_query("WPR"));
        assert!(!noel.matches_query("marketing"));
    }
}
