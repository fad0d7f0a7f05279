//! 期权数据集合

use crate::common::UPDATED_AT_FIELD;
use crate::models::{CollectionSpec, Domain, FieldInfo};

pub static COLLECTIONS: &[CollectionSpec] = &[CollectionSpec {
    name: "option_contract_info_ctp",
    display_name: "openctp期权合约信息",
    domain: Domain::Options,
    akshare_func: "option_contract_info_ctp",
    unique_keys: &["交易所ID", "合约ID"],
    field_info: &[
        FieldInfo::string("交易所ID", "交易所ID"),
        FieldInfo::string("合约ID", "合约ID"),
        FieldInfo::string("合约名称", "合约名称"),
        FieldInfo::string("商品类别", "商品类别"),
        FieldInfo::string("品种ID", "品种ID"),
        FieldInfo::int("合约乘数", "合约乘数"),
        FieldInfo::float("最小变动价位", "最小变动价位"),
        FieldInfo::float("做多保证金率", "做多保证金率"),
        FieldInfo::float("做空保证金率", "做空保证金率"),
        FieldInfo::float("开仓手续费率", "开仓手续费率"),
        FieldInfo::float("开仓手续费/手", "开仓手续费/手"),
        FieldInfo::float("平仓手续费率", "平仓手续费率"),
        FieldInfo::float("平仓手续费/手", "平仓手续费/手"),
        FieldInfo::int("交割年份", "交割年份"),
        FieldInfo::int("交割月份", "交割月份"),
        FieldInfo::string("上市日期", "上市日期"),
        FieldInfo::string("最后交易日", "最后交易日"),
        FieldInfo::string("交割日", "交割日"),
        FieldInfo::string("标的合约ID", "标的合约ID"),
        FieldInfo::int("标的合约乘数", "标的合约乘数"),
        FieldInfo::string("期权类型", "期权类型"),
        FieldInfo::float("行权价", "行权价"),
        FieldInfo::string("合约状态", "合约状态"),
        FieldInfo::datetime("更新时间", "数据更新时间"),
    ],
    timestamp_field: UPDATED_AT_FIELD,
    ..CollectionSpec::EMPTY
}];
