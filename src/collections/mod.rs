//! 数据集合目录
//!
//! 按业务域划分的集合描述符表

pub mod bonds;
pub mod currencies;
pub mod funds;
pub mod futures;
pub mod options;
pub mod stocks;

use crate::models::CollectionSpec;

/// 所有业务域的集合描述符
pub fn all() -> impl Iterator<Item = &'static CollectionSpec> {
    self::futures::COLLECTIONS
        .iter()
        .chain(stocks::COLLECTIONS)
        .chain(bonds::COLLECTIONS)
        .chain(options::COLLECTIONS)
        .chain(currencies::COLLECTIONS)
        .chain(funds::COLLECTIONS)
}
