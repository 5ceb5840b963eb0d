pub mod person_name;
