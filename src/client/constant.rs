pub const SITE_NAME: &str = "Tahfidz Monitoring";
