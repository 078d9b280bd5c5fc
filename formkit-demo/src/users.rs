//! The demo's static user dataset.

use formkit::prelude::*;

#[derive(Debug, Clone)]
pub struct User {
    pub id: u32,
    pub name: &'static str,
    pub email: &'static str,
    pub age: i64,
}

impl TableRow for User {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn cell(&self, column: usize) -> Option<CellValue> {
        match column {
            0 => Some(self.name.into()),
            1 => Some(self.email.into()),
            2 => Some(self.age.into()),
            _ => None,
        }
    }
}

pub fn dataset() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Pratyush",
            email: "pratyush@example.com",
            age: 25,
        },
        User {
            id: 2,
            name: "Bhavesh",
            email: "bhavesh@example.com",
            age: 30,
        },
        User {
            id: 3,
            name: "Kunal",
            email: "kunal@example.com",
            age: 28,
        },
    ]
}

pub fn columns() -> Vec<Column> {
    vec![
        Column::new("Name", 14).sortable(),
        Column::new("Email", 26),
        Column::new("Age", 6).sortable().align(Alignment::Right),
    ]
}
