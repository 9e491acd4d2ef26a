use serde::{Deserialize, Deserializer};

pub mod book;
pub mod loan;
pub mod member;
pub mod stats;
pub mod user;

// 空文字の任意項目は未設定として扱う（ISBN の一意制約に空文字が引っかからないように）
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// garde の検証より前に空文字を None に寄せるためのデシリアライザ
pub(crate) fn deserialize_non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(non_blank)
}
