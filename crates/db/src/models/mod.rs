pub mod award;
pub mod celebrity;
pub mod oscar;
