//! Demo data loaded at startup

use crate::entities::company::Company;
use crate::entities::employee::Employee;
use uuid::Uuid;

pub const IT_SOLUTIONS_ID: Uuid = Uuid::from_u128(0xc9d4c053_49b6_410c_bc78_2d54a9991870);
pub const ADMIN_SOLUTIONS_ID: Uuid = Uuid::from_u128(0xc9d4c053_49b6_410c_bc78_2d54a9991871);

pub fn companies() -> Vec<Company> {
    vec![
        Company {
            id: IT_SOLUTIONS_ID,
            name: "IT_Solutions Ltd".to_string(),
            address: "583 Wall Dr. Gwynn Oak, MD 21207".to_string(),
            country: Some("USA".to_string()),
        },
        Company {
            id: ADMIN_SOLUTIONS_ID,
            name: "Admin_Solutions Ltd".to_string(),
            address: "312 Forest Avenue, BF 923".to_string(),
            country: Some("USA".to_string()),
        },
    ]
}

pub fn employees() -> Vec<Employee> {
    vec![
        Employee {
            id: Uuid::from_u128(0x80abbca8_664d_4b20_b5de_024705497d4a),
            name: "Sam Raiden".to_string(),
            age: 26,
            position: "Software developer".to_string(),
            company_id: IT_SOLUTIONS_ID,
        },
        Employee {
            id: Uuid::from_u128(0x86dba8c0_d178_41e7_938c_ed49778fb52a),
            name: "Jana McLeaf".to_string(),
            age: 30,
            position: "Software developer".to_string(),
            company_id: IT_SOLUTIONS_ID,
        },
        Employee {
            id: Uuid::from_u128(0x021ca3c1_0deb_4afd_ae94_2159a8479811),
            name: "Kane Miller".to_string(),
            age: 35,
            position: "Administrator".to_string(),
            company_id: ADMIN_SOLUTIONS_ID,
        },
    ]
}
