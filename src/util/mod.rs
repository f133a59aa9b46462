pub mod registration_number;
