pub mod celebrity;
pub mod oscar_race;
