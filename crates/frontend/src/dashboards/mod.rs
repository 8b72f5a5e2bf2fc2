pub mod d001_home;
pub mod d002_admin;
