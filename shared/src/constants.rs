pub static TABLE_SALES_NUMBERS: &'static str = "salesNumbers";
pub static TABLE_PRODUCTS: &'static str = "products";
pub static TABLE_STATUSES: &'static str = "statuses";
pub static TABLE_PHONE_LABELS: &'static str = "phoneNumberLabels";
pub static TABLE_POSITION_LABELS: &'static str = "positionLabels";
pub static TABLE_CHANNEL_TYPES: &'static str = "channelTypes";
pub static TABLE_ACTIVITY_LOGS: &'static str = "activityLogs";
pub static TABLE_NOTES: &'static str = "notes";

pub static ORDER_CREATED: &'static str = "created_at";
pub static ORDER_RANK: &'static str = "order";

/// Display rank used when a label row carries no explicit `order`.
pub const DEFAULT_RANK: i32 = 999;

pub static STATUS_NONE: &'static str = "Sin Estado";

pub static KOMMO_YES: &'static str = "Sí";
pub static KOMMO_NO: &'static str = "No";

pub static COUNTRIES: [&'static str; 5] = ["AR", "CO", "VE", "MX", "CL"];

pub static STORAGE_COLUMN_ORDER: &'static str = "salesManagerApp_columnOrder";
pub static STORAGE_SESSION: &'static str = "salesManagerApp_session";

pub static SEED_STATUSES: [&'static str; 11] = [
    "Activo", "Libre", "Revisar", "Bloqueado", "Pendiente", "Reactivado",
    "Calentando", "Abandonado", "En Revision", "Programado", "Por Programar",
];
pub static SEED_PRODUCTS: [&'static str; 3] = ["PRODUCTO A", "PRODUCTO B", "PRODUCTO C"];
pub static SEED_PHONE_LABELS: [&'static str; 5] = ["C1", "C2", "C3", "C4", "C5"];
pub static SEED_POSITION_LABELS: [&'static str; 5] = ["W1", "W2", "W3", "W4", "W5"];
pub static SEED_CHANNEL_TYPES: [&'static str; 4] = ["WPP", "FB", "IG", "TT"];
