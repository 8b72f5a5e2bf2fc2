pub mod u101_wreath;
pub mod u102_supplies;
pub mod u103_vehicle;
pub mod u104_business_card;
pub mod u105_document;
pub mod u106_facility;
