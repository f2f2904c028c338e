use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One generated person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// 1-based position in the virtual stream: `page * page_size + index + 1`.
    pub number: u64,
    /// UUID drawn from the page's seeded stream.
    pub id: String,
    pub full_name: String,
    pub address: String,
    pub phone: String,
}

/// Text fields that error injection may corrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordField {
    FullName,
    Address,
    Phone,
}

impl RecordField {
    pub const ALL: [RecordField; 3] = [Self::FullName, Self::Address, Self::Phone];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Address => "address",
            Self::Phone => "phone",
        }
    }
}

impl Record {
    pub fn field(&self, field: RecordField) -> &str {
        match field {
            RecordField::FullName => &self.full_name,
            RecordField::Address => &self.address,
            RecordField::Phone => &self.phone,
        }
    }

    pub fn field_mut(&mut self, field: RecordField) -> &mut String {
        match field {
            RecordField::FullName => &mut self.full_name,
            RecordField::Address => &mut self.address,
            RecordField::Phone => &mut self.phone,
        }
    }

    /// Column values in CSV export order.
    pub fn csv_row(&self) -> [String; 5] {
        [
            self.number.to_string(),
            self.id.clone(),
            self.full_name.clone(),
            self.address.clone(),
            self.phone.clone(),
        ]
    }
}

/// CSV header matching [`Record::csv_row`].
pub const CSV_HEADER: [&str; 5] = ["Number", "Id", "FullName", "Address", "Phone"];
