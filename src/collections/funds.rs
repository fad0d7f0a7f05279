//! 基金数据集合

use crate::common::UPDATED_AT_FIELD;
use crate::models::{BatchSpec, CollectionSpec, Domain, FieldInfo, ProviderKind};

pub static COLLECTIONS: &[CollectionSpec] = &[
    CollectionSpec {
        name: "fund_name_em",
        display_name: "基金基本信息-东财",
        domain: Domain::Funds,
        akshare_func: "fund_name_em",
        unique_keys: &["基金代码"],
        field_info: &[
            FieldInfo::string("基金代码", "基金代码"),
            FieldInfo::string("拼音缩写", "拼音缩写"),
            FieldInfo::string("基金简称", "基金简称"),
            FieldInfo::string("基金类型", "基金类型"),
            FieldInfo::string("拼音全称", "拼音全称"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    // 按基金代码 × 年份批量抓取，代码列表来自 fund_name_em
    CollectionSpec {
        name: "fund_portfolio_hold_em",
        display_name: "基金持仓股票-东财",
        domain: Domain::Funds,
        akshare_func: "fund_portfolio_hold_em",
        kind: ProviderKind::Mapped,
        unique_keys: &["基金代码", "股票代码", "季度"],
        field_info: &[
            FieldInfo::string("基金代码", "基金代码"),
            FieldInfo::string("股票代码", "股票代码"),
            FieldInfo::string("股票名称", "股票名称"),
            FieldInfo::float("占净值比例", "持仓占比"),
            FieldInfo::int("持仓数", "持仓数量"),
            FieldInfo::float("持仓市值", "持仓市值"),
            FieldInfo::string("季度", "季度"),
            FieldInfo::datetime("更新时间", "更新时间"),
        ],
        param_mapping: &[
            ("fund_code", "symbol"),
            ("symbol", "symbol"),
            ("code", "symbol"),
            ("year", "date"),
            ("date", "date"),
        ],
        required_params: &["symbol", "date"],
        add_param_columns: &[("symbol", "基金代码")],
        timestamp_field: UPDATED_AT_FIELD,
        batch: Some(BatchSpec {
            source_collection: "fund_name_em",
            source_field: "基金代码",
            param: "fund_code",
            use_year: true,
            years_from: Some(2010),
            incremental_fields: &["基金代码", "季度"],
            year_fields: &["季度"],
        }),
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "fund_etf_spot_em",
        display_name: "ETF基金实时行情-东财",
        domain: Domain::Funds,
        akshare_func: "fund_etf_spot_em",
        unique_keys: &["代码", "数据日期"],
        field_info: &[
            FieldInfo::string("代码", ""),
            FieldInfo::string("名称", ""),
            FieldInfo::float("最新价", ""),
            FieldInfo::float("IOPV实时估值", ""),
            FieldInfo::float("基金折价率", "注意单位: %"),
            FieldInfo::float("涨跌额", ""),
            FieldInfo::float("涨跌幅", "注意单位: %"),
            FieldInfo::float("成交量", ""),
            FieldInfo::float("成交额", ""),
            FieldInfo::float("开盘价", ""),
            FieldInfo::float("最高价", ""),
            FieldInfo::float("最低价", ""),
            FieldInfo::float("昨收", ""),
            FieldInfo::float("换手率", ""),
            FieldInfo::float("主力净流入-净额", ""),
            FieldInfo::float("主力净流入-净占比", ""),
            FieldInfo::float("最新份额", ""),
            FieldInfo::int("流通市值", ""),
            FieldInfo::int("总市值", ""),
            FieldInfo::string("数据日期", ""),
            FieldInfo::datetime("更新时间", ""),
        ],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "fund_basic_info",
        display_name: "雪球基金基本信息",
        domain: Domain::Funds,
        akshare_func: "fund_individual_basic_info_xq",
        kind: ProviderKind::Mapped,
        unique_keys: &["基金代码"],
        field_info: &[
            FieldInfo::string("基金代码", ""),
            FieldInfo::string("基金名称", ""),
            FieldInfo::string("基金全称", ""),
            FieldInfo::string("成立时间", ""),
            FieldInfo::string("最新规模", ""),
            FieldInfo::string("基金公司", ""),
            FieldInfo::string("基金经理", ""),
            FieldInfo::string("托管银行", ""),
            FieldInfo::string("基金类型", ""),
            FieldInfo::string("评级机构", ""),
            FieldInfo::string("基金评级", ""),
            FieldInfo::string("投资策略", ""),
            FieldInfo::string("投资目标", ""),
            FieldInfo::string("业绩比较基准", ""),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[
            ("基金代码", "symbol"),
            ("fund_code", "symbol"),
            ("code", "symbol"),
            ("symbol", "symbol"),
        ],
        required_params: &["symbol"],
        add_param_columns: &[("symbol", "基金代码")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "fund_cf_em",
        display_name: "基金拆分-东财",
        domain: Domain::Funds,
        akshare_func: "fund_cf_em",
        kind: ProviderKind::Mapped,
        unique_keys: &["基金代码", "拆分折算日", "年份"],
        field_info: &[
            FieldInfo::string("基金代码", "基金代码"),
            FieldInfo::string("基金简称", "基金简称"),
            FieldInfo::string("拆分折算日", "拆分折算日"),
            FieldInfo::string("拆分类型", "拆分类型"),
            FieldInfo::float("拆分折算比例", "拆分折算比例"),
            FieldInfo::string("年份", "年份"),
        ],
        param_mapping: &[("year", "date"), ("date", "date")],
        required_params: &["date"],
        add_param_columns: &[("date", "年份")],
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "fund_etf_fund_daily_em",
        display_name: "场内交易基金实时行情-东方财富",
        domain: Domain::Funds,
        akshare_func: "fund_etf_fund_daily_em",
        unique_keys: &["基金代码", "更新时间"],
        field_info: &[
            FieldInfo::string("基金代码", ""),
            FieldInfo::string("基金简称", ""),
            FieldInfo::string("类型", ""),
            FieldInfo::float("当前交易日-单位净值", "实际列名带日期"),
            FieldInfo::float("当前交易日-累计净值", "实际列名带日期"),
            FieldInfo::float("前一个交易日-单位净值", "实际列名带日期"),
            FieldInfo::float("前一个交易日-累计净值", "实际列名带日期"),
            FieldInfo::float("增长值", ""),
            FieldInfo::string("增长率", ""),
            FieldInfo::string("市价", ""),
            FieldInfo::string("折价率", ""),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "fund_etf_fund_info_em",
        display_name: "场内交易基金历史行情-东财",
        domain: Domain::Funds,
        akshare_func: "fund_etf_fund_info_em",
        kind: ProviderKind::Mapped,
        unique_keys: &["基金代码", "净值日期"],
        field_info: &[
            FieldInfo::string("基金代码", "基金代码"),
            FieldInfo::date("净值日期", "净值日期"),
            FieldInfo::float("单位净值", "单位净值"),
            FieldInfo::float("累计净值", "累计净值"),
            FieldInfo::float("日增长率", "日增长率"),
            FieldInfo::string("申购状态", "申购状态"),
            FieldInfo::string("赎回状态", "赎回状态"),
        ],
        param_mapping: &[
            ("fund_code", "fund"),
            ("fund", "fund"),
            ("code", "fund"),
            ("start_date", "start_date"),
            ("end_date", "end_date"),
        ],
        required_params: &["fund"],
        add_param_columns: &[("fund", "基金代码")],
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "fund_etf_hist_sina",
        display_name: "ETF基金历史行情-新浪",
        domain: Domain::Funds,
        akshare_func: "fund_etf_hist_sina",
        kind: ProviderKind::Mapped,
        unique_keys: &["代码", "日期"],
        field_info: &[
            FieldInfo::string("代码", "基金代码（如 sh510050）"),
            FieldInfo::date("日期", "交易日期"),
            FieldInfo::float("开盘价", "开盘价"),
            FieldInfo::float("最高价", "最高价"),
            FieldInfo::float("最低价", "最低价"),
            FieldInfo::float("收盘价", "收盘价"),
            FieldInfo::int("成交量", "成交量（手）"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[("fund_code", "symbol"), ("code", "symbol"), ("symbol", "symbol")],
        required_params: &["symbol"],
        add_param_columns: &[("symbol", "代码")],
        // 接口返回英文列名
        column_renames: &[
            ("date", "日期"),
            ("open", "开盘价"),
            ("high", "最高价"),
            ("low", "最低价"),
            ("close", "收盘价"),
            ("volume", "成交量"),
        ],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "fund_fh_em",
        display_name: "基金分红-东财",
        domain: Domain::Funds,
        akshare_func: "fund_fh_em",
        kind: ProviderKind::Mapped,
        unique_keys: &["基金代码", "权益登记日", "年份"],
        field_info: &[
            FieldInfo::string("基金代码", "基金代码"),
            FieldInfo::string("基金简称", "基金简称"),
            FieldInfo::string("权益登记日", "权益登记日"),
            FieldInfo::string("除息日", "除息日"),
            FieldInfo::float("每份分红", "每份分红"),
            FieldInfo::string("分红发放日", "分红发放日"),
            FieldInfo::string("年份", "年份"),
        ],
        param_mapping: &[("year", "date"), ("date", "date")],
        required_params: &["date"],
        add_param_columns: &[("date", "年份")],
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "fund_money_fund_daily_em",
        display_name: "货币型基金实时行情-东方财富",
        domain: Domain::Funds,
        akshare_func: "fund_money_fund_daily_em",
        unique_keys: &["基金代码", "成立日期"],
        field_info: &[
            FieldInfo::string("基金代码", ""),
            FieldInfo::string("基金简称", ""),
            FieldInfo::float("当前交易日-万份收益", ""),
            FieldInfo::float("当前交易日-7日年化%", ""),
            FieldInfo::float("当前交易日-单位净值", ""),
            FieldInfo::float("前一交易日-万份收益", ""),
            FieldInfo::float("前一交易日-7日年化%", ""),
            FieldInfo::float("前一交易日-单位净值", ""),
            FieldInfo::string("日涨幅", ""),
            FieldInfo::string("成立日期", ""),
            FieldInfo::string("基金经理", ""),
            FieldInfo::string("手续费", ""),
            FieldInfo::string("可购全部", ""),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "fund_open_fund_daily_em",
        display_name: "开放式基金实时行情-东方财富",
        domain: Domain::Funds,
        akshare_func: "fund_open_fund_daily_em",
        unique_keys: &["基金代码", "更新时间"],
        field_info: &[
            FieldInfo::string("基金代码", ""),
            FieldInfo::string("基金简称", ""),
            FieldInfo::float("单位净值", "今日单位净值"),
            FieldInfo::float("累计净值", "今日累计净值"),
            FieldInfo::float("前一日单位净值", "前一日单位净值"),
            FieldInfo::float("前一日累计净值", "前一日累计净值"),
            FieldInfo::float("日增长值", ""),
            FieldInfo::float("日增长率", ""),
            FieldInfo::string("申购状态", ""),
            FieldInfo::string("赎回状态", ""),
            FieldInfo::string("手续费", "注意单位: %"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "fund_open_fund_info_em",
        display_name: "开放式基金历史行情-东财",
        domain: Domain::Funds,
        akshare_func: "fund_open_fund_info_em",
        kind: ProviderKind::Mapped,
        unique_keys: &["基金代码", "净值日期", "指标类型"],
        field_info: &[
            FieldInfo::string("基金代码", "基金代码"),
            FieldInfo::date("净值日期", "净值日期"),
            FieldInfo::float("单位净值", "单位净值"),
            FieldInfo::float("累计净值", "累计净值"),
            FieldInfo::float("日增长率", "日增长率"),
            FieldInfo::string("指标类型", "指标类型"),
        ],
        param_mapping: &[
            ("fund_code", "fund"),
            ("fund", "fund"),
            ("code", "fund"),
            ("indicator", "indicator"),
        ],
        default_params: &[("indicator", "单位净值走势")],
        required_params: &["fund", "indicator"],
        add_param_columns: &[("fund", "基金代码"), ("indicator", "指标类型")],
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "fund_overview_em",
        display_name: "基金基本概况-东财",
        domain: Domain::Funds,
        akshare_func: "fund_overview_em",
        kind: ProviderKind::Mapped,
        unique_keys: &["基金代码"],
        field_info: &[
            FieldInfo::string("基金全称", ""),
            FieldInfo::string("基金简称", ""),
            FieldInfo::string("基金代码", ""),
            FieldInfo::string("基金类型", ""),
            FieldInfo::string("发行日期", ""),
            FieldInfo::string("成立日期/规模", ""),
            FieldInfo::string("资产规模", ""),
            FieldInfo::string("份额规模", ""),
            FieldInfo::string("基金管理人", ""),
            FieldInfo::string("基金托管人", ""),
            FieldInfo::string("基金经理人", ""),
            FieldInfo::string("成立来分红", ""),
            FieldInfo::string("管理费率", ""),
            FieldInfo::string("托管费率", ""),
            FieldInfo::string("销售服务费率", ""),
            FieldInfo::string("最高认购费率", ""),
            FieldInfo::string("业绩比较基准", ""),
            FieldInfo::string("跟踪标的", ""),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[("symbol", "symbol"), ("fund_code", "symbol"), ("code", "symbol")],
        required_params: &["symbol"],
        add_param_columns: &[("symbol", "基金代码")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    // 与 fund_portfolio_hold_em 共用基金代码列表
    CollectionSpec {
        name: "fund_portfolio_change_em",
        display_name: "基金持仓变动-东财",
        domain: Domain::Funds,
        akshare_func: "fund_portfolio_change_em",
        kind: ProviderKind::Mapped,
        unique_keys: &["基金代码", "股票代码", "季度"],
        field_info: &[
            FieldInfo::string("基金代码", "基金代码"),
            FieldInfo::string("股票代码", "股票代码"),
            FieldInfo::string("股票名称", "股票名称"),
            FieldInfo::string("持仓变动", "持仓变动类型"),
            FieldInfo::float("变动数量", "变动数量"),
            FieldInfo::float("变动市值", "变动市值"),
            FieldInfo::string("季度", "季度"),
        ],
        param_mapping: &[
            ("fund_code", "symbol"),
            ("symbol", "symbol"),
            ("code", "symbol"),
            ("indicator", "indicator"),
            ("year", "date"),
            ("date", "date"),
        ],
        default_params: &[("indicator", "累计买入")],
        required_params: &["symbol", "indicator", "date"],
        add_param_columns: &[("symbol", "基金代码")],
        batch: Some(BatchSpec {
            source_collection: "fund_name_em",
            source_field: "基金代码",
            param: "fund_code",
            use_year: true,
            years_from: Some(2010),
            incremental_fields: &["基金代码", "季度"],
            year_fields: &["季度"],
        }),
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "fund_rating_sh_em",
        display_name: "上海证券评级-东财",
        domain: Domain::Funds,
        akshare_func: "fund_rating_sh",
        kind: ProviderKind::Mapped,
        unique_keys: &["代码", "日期"],
        field_info: &[
            FieldInfo::string("代码", "基金代码"),
            FieldInfo::string("简称", "基金简称"),
            FieldInfo::string("基金经理", "基金经理"),
            FieldInfo::string("基金公司", "基金公司"),
            FieldInfo::int("3年期评级-3年评级", "3年期评级"),
            FieldInfo::float("3年期评级-较上期", "3年期评级较上期变化"),
            FieldInfo::float("5年期评级-5年评级", "5年期评级"),
            FieldInfo::float("5年期评级-较上期", "5年期评级较上期变化"),
            FieldInfo::float("单位净值", "单位净值"),
            FieldInfo::string("日期", "查询日期"),
            FieldInfo::float("日增长率", "日增长率（%）"),
            FieldInfo::float("近1年涨幅", "近1年涨幅（%）"),
            FieldInfo::float("近3年涨幅", "近3年涨幅（%）"),
            FieldInfo::float("近5年涨幅", "近5年涨幅（%）"),
            FieldInfo::string("手续费", "手续费"),
            FieldInfo::string("类型", "基金类型"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[("quarter_date", "date"), ("date", "date"), ("qdate", "date")],
        required_params: &["date"],
        add_param_columns: &[("date", "日期")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "fund_report_stock_cninfo",
        display_name: "基金重仓股-巨潮",
        domain: Domain::Funds,
        akshare_func: "fund_report_stock_cninfo",
        kind: ProviderKind::Mapped,
        unique_keys: &["股票代码", "日期"],
        field_info: &[
            FieldInfo::int("序号", "序号"),
            FieldInfo::string("股票代码", "股票代码"),
            FieldInfo::string("股票简称", "股票简称"),
            FieldInfo::string("报告期", "报告期"),
            FieldInfo::int("基金覆盖家数", "基金覆盖家数"),
            FieldInfo::string("持股总数", "持股总数"),
            FieldInfo::string("持股总市值", "持股总市值"),
            FieldInfo::string("日期", "查询的报告日期"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[("date", "date"), ("quarter_date", "date"), ("qdate", "date")],
        required_params: &["date"],
        add_param_columns: &[("date", "日期")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "fund_scale_open_sina",
        display_name: "开放式基金规模-新浪",
        domain: Domain::Funds,
        akshare_func: "fund_scale_open_sina",
        kind: ProviderKind::Mapped,
        unique_keys: &["基金代码", "更新日期"],
        field_info: &[
            FieldInfo::int("序号", "序号"),
            FieldInfo::string("基金代码", "基金代码"),
            FieldInfo::string("基金简称", "基金简称"),
            FieldInfo::float("单位净值", "单位净值（元）"),
            FieldInfo::float("总募集规模", "总募集规模（万份）"),
            FieldInfo::float("最近总份额", "最近总份额（份）"),
            FieldInfo::string("成立日期", "成立日期"),
            FieldInfo::string("基金经理", "基金经理"),
            FieldInfo::string("更新日期", "更新日期"),
            FieldInfo::string("基金类型", "股票型基金/混合型基金/债券型基金/货币型基金/QDII基金"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[("symbol", "symbol"), ("fund_type", "symbol"), ("type", "symbol")],
        required_params: &["symbol"],
        add_param_columns: &[("symbol", "基金类型")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
];
