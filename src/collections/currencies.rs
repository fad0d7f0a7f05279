//! 货币数据集合
//!
//! 接口需要 currencyscoop 的 api_key

use crate::models::{CollectionSpec, Domain, FieldInfo, FieldType, ProviderKind};

const RATE_FIELDS: &[FieldInfo] = &[
    FieldInfo::string("currency", "货币代码"),
    FieldInfo::date("date", "日期"),
    FieldInfo::string("base", "基础货币"),
    FieldInfo::float("rates", "汇率"),
    FieldInfo::datetime("scraped_at", "抓取时间"),
];

pub static COLLECTIONS: &[CollectionSpec] = &[
    CollectionSpec {
        name: "currency_latest",
        display_name: "货币报价最新数据",
        domain: Domain::Currencies,
        akshare_func: "currency_latest",
        kind: ProviderKind::Mapped,
        unique_keys: &["base", "currency", "date"],
        field_info: RATE_FIELDS,
        param_mapping: &[("base", "base"), ("symbols", "symbols"), ("api_key", "api_key")],
        required_params: &["api_key"],
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "currency_history",
        display_name: "货币报价历史数据",
        domain: Domain::Currencies,
        akshare_func: "currency_history",
        kind: ProviderKind::Mapped,
        unique_keys: &["base", "currency", "date"],
        field_info: RATE_FIELDS,
        param_mapping: &[
            ("base", "base"),
            ("date", "date"),
            ("symbols", "symbols"),
            ("api_key", "api_key"),
        ],
        required_params: &["date", "api_key"],
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "currency_currencies",
        display_name: "货币基础信息查询",
        domain: Domain::Currencies,
        akshare_func: "currency_currencies",
        kind: ProviderKind::Mapped,
        unique_keys: &["code"],
        field_info: &[
            FieldInfo::int("id", "ID"),
            FieldInfo::string("name", "货币名称"),
            FieldInfo::string("short_code", "短代码"),
            FieldInfo::string("code", "代码"),
            FieldInfo::int("precision", "精度"),
            FieldInfo::int("subunit", "子单位"),
            FieldInfo::string("symbol", "符号"),
            FieldInfo::new("symbol_first", FieldType::Object, "符号在前"),
            FieldInfo::string("decimal_mark", "小数点"),
            FieldInfo::string("thousands_separator", "千位分隔符"),
            FieldInfo::datetime("scraped_at", "抓取时间"),
        ],
        param_mapping: &[("c_type", "c_type"), ("api_key", "api_key")],
        required_params: &["api_key"],
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "currency_convert",
        display_name: "货币转换",
        domain: Domain::Currencies,
        akshare_func: "currency_convert",
        kind: ProviderKind::Mapped,
        unique_keys: &["base", "to", "amount", "date"],
        field_info: &[
            FieldInfo::date("date", "日期"),
            FieldInfo::string("base", "基础货币"),
            FieldInfo::string("to", "目标货币"),
            FieldInfo::float("amount", "原始金额"),
            FieldInfo::float("value", "转换后金额"),
            FieldInfo::datetime("scraped_at", "抓取时间"),
        ],
        param_mapping: &[
            ("base", "base"),
            ("to", "to"),
            ("amount", "amount"),
            ("api_key", "api_key"),
        ],
        default_params: &[("base", "USD"), ("to", "CNY"), ("amount", "1")],
        required_params: &["base", "to", "amount", "api_key"],
        add_param_columns: &[("base", "base"), ("to", "to"), ("amount", "amount")],
        ..CollectionSpec::EMPTY
    },
    // 每个货币一列，列名随 symbols 变化
    CollectionSpec {
        name: "currency_time_series",
        display_name: "货币报价时间序列数据",
        domain: Domain::Currencies,
        akshare_func: "currency_time_series",
        kind: ProviderKind::Mapped,
        unique_keys: &["base", "date"],
        field_info: &[
            FieldInfo::date("date", "日期"),
            FieldInfo::string("base", "基础货币"),
            FieldInfo::datetime("scraped_at", "抓取时间"),
        ],
        param_mapping: &[
            ("base", "base"),
            ("start_date", "start_date"),
            ("end_date", "end_date"),
            ("symbols", "symbols"),
            ("api_key", "api_key"),
        ],
        default_params: &[("base", "USD")],
        required_params: &["base", "start_date", "end_date", "api_key"],
        add_param_columns: &[("base", "base")],
        ..CollectionSpec::EMPTY
    },
];
