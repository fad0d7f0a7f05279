//! 期货数据集合

use crate::common::UPDATED_AT_FIELD;
use crate::models::{CollectionSpec, Domain, FieldInfo, ProviderKind};

pub static COLLECTIONS: &[CollectionSpec] = &[
    CollectionSpec {
        name: "futures_fees_info",
        display_name: "期货交易费用参照表",
        domain: Domain::Futures,
        akshare_func: "futures_fees_info",
        unique_keys: &["交易所", "合约代码"],
        field_info: &[
            FieldInfo::string("交易所", "交易所名称"),
            FieldInfo::string("合约代码", "合约代码"),
            FieldInfo::string("合约名称", "合约名称"),
            FieldInfo::string("品种代码", "品种代码"),
            FieldInfo::string("品种名称", "品种名称"),
            FieldInfo::int("合约乘数", "合约乘数"),
            FieldInfo::float("最小跳动", "最小变动价位"),
            FieldInfo::float("开仓费率（按金额）", "开仓费率"),
            FieldInfo::float("开仓费用（按手）", "开仓费用"),
            FieldInfo::float("平仓费率（按金额）", "平仓费率"),
            FieldInfo::float("平仓费用（按手）", "平仓费用"),
            FieldInfo::float("平今费率（按金额）", "平今费率"),
            FieldInfo::float("平今费用（按手）", "平今费用"),
            FieldInfo::float("做多保证金率（按金额）", "做多保证金率"),
            FieldInfo::int("做多保证金（按手）", "做多保证金"),
            FieldInfo::float("做空保证金率（按金额）", "做空保证金率"),
            FieldInfo::int("做空保证金（按手）", "做空保证金"),
            FieldInfo::float("上日结算价", "上日结算价"),
            FieldInfo::float("上日收盘价", "上日收盘价"),
            FieldInfo::float("最新价", "最新价格"),
            FieldInfo::int("成交量", "成交量"),
            FieldInfo::int("持仓量", "持仓量"),
            FieldInfo::float("1手开仓费用", "1手开仓费用"),
            FieldInfo::float("1手平仓费用", "1手平仓费用"),
            FieldInfo::float("1手平今费用", "1手平今费用"),
            FieldInfo::float("做多1手保证金", "做多1手保证金"),
            FieldInfo::float("做空1手保证金", "做空1手保证金"),
        ],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "futures_hist_em",
        display_name: "内盘-历史行情数据-东财",
        domain: Domain::Futures,
        akshare_func: "futures_hist_em",
        kind: ProviderKind::Mapped,
        unique_keys: &["查询参数_symbol", "查询参数_period", "时间"],
        field_info: &[
            FieldInfo::string("时间", "时间"),
            FieldInfo::float("开盘", "开盘价"),
            FieldInfo::float("最高", "最高价"),
            FieldInfo::float("最低", "最低价"),
            FieldInfo::float("收盘", "收盘价"),
            FieldInfo::int("成交量", "成交量"),
        ],
        param_mapping: &[
            ("symbol", "symbol"),
            ("contract", "symbol"),
            ("period", "period"),
            ("start_date", "start_date"),
            ("end_date", "end_date"),
        ],
        required_params: &["symbol", "period"],
        add_param_columns: &[("symbol", "查询参数_symbol"), ("period", "查询参数_period")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "futures_warehouse_receipt_dce",
        display_name: "仓单日报-大连商品交易所",
        domain: Domain::Futures,
        akshare_func: "futures_warehouse_receipt_dce",
        kind: ProviderKind::Mapped,
        unique_keys: &["查询参数_date", "品种代码", "仓库/分库"],
        field_info: &[
            FieldInfo::string("品种代码", "品种代码"),
            FieldInfo::string("品种名称", "品种名称"),
            FieldInfo::string("仓库/分库", "仓库/分库名称"),
            FieldInfo::string("可选提货地点/分库-数量", "可选提货地点"),
            FieldInfo::int("昨日仓单量（手）", "昨日仓单量(手)"),
            FieldInfo::int("今日仓单量（手）", "今日仓单量(手)"),
            FieldInfo::int("增减（手）", "仓单增减(手)"),
        ],
        param_mapping: &[("date", "date"), ("trade_date", "date")],
        required_params: &["date"],
        add_param_columns: &[("date", "查询参数_date")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "futures_rule",
        display_name: "期货规则-交易日历表",
        domain: Domain::Futures,
        akshare_func: "futures_rule",
        kind: ProviderKind::Mapped,
        unique_keys: &["交易所", "代码", "查询参数_date"],
        field_info: &[
            FieldInfo::string("交易所", "交易所名称"),
            FieldInfo::string("品种", "品种名称"),
            FieldInfo::string("代码", "合约代码"),
            FieldInfo::float("交易保证金比例", "交易保证金比例(%)"),
            FieldInfo::float("涨跌停板幅度", "涨跌停板幅度(%)"),
            FieldInfo::int("合约乘数", "合约乘数"),
            FieldInfo::float("最小变动价位", "最小变动价位"),
            FieldInfo::int("限价单每笔最大下单手数", "限价单每笔最大下单手数"),
            FieldInfo::string("特殊合约参数调整", "特殊合约参数调整说明"),
            FieldInfo::string("调整备注", "调整备注"),
        ],
        param_mapping: &[("date", "date"), ("trade_date", "date")],
        required_params: &["date"],
        add_param_columns: &[("date", "查询参数_date")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "futures_comm_info",
        display_name: "期货手续费与保证金",
        domain: Domain::Futures,
        akshare_func: "futures_comm_info",
        kind: ProviderKind::Mapped,
        unique_keys: &["交易所名称", "合约代码"],
        field_info: &[
            FieldInfo::string("交易所名称", "交易所名称"),
            FieldInfo::string("合约名称", "合约名称"),
            FieldInfo::string("合约代码", "合约代码"),
            FieldInfo::float("现价", "当前价格"),
            FieldInfo::float("涨停板", "涨停板价格"),
            FieldInfo::float("跌停板", "跌停板价格"),
            FieldInfo::float("保证金-买开", "买开保证金(%)"),
            FieldInfo::float("保证金-卖开", "卖开保证金(%)"),
            FieldInfo::float("保证金-每手", "每手保证金(元)"),
            FieldInfo::float("手续费标准-开仓-万分之", "开仓手续费率"),
            FieldInfo::string("手续费标准-开仓-元", "开仓手续费"),
            FieldInfo::float("手续费标准-平昨-万分之", "平昨手续费率"),
            FieldInfo::string("手续费标准-平昨-元", "平昨手续费"),
            FieldInfo::float("手续费标准-平今-万分之", "平今手续费率"),
            FieldInfo::string("手续费标准-平今-元", "平今手续费"),
            FieldInfo::int("每跳毛利", "每跳毛利(元)"),
            FieldInfo::float("手续费", "手续费(开+平)"),
            FieldInfo::float("每跳净利", "每跳净利(元)"),
            FieldInfo::string("备注", "是否主力合约"),
            FieldInfo::string("手续费更新时间", "手续费更新时间"),
            FieldInfo::string("价格更新时间", "价格更新时间"),
            FieldInfo::string("查询参数_symbol", "查询的交易所"),
        ],
        param_mapping: &[("symbol", "symbol"), ("exchange", "symbol")],
        default_params: &[("symbol", "所有")],
        add_param_columns: &[("symbol", "查询参数_symbol")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    // 持仓排名和仓单日报按品种返回多张表，展开后带 symbol 列
    CollectionSpec {
        name: "futures_dce_position_rank",
        display_name: "大连商品交易所持仓排名",
        domain: Domain::Futures,
        akshare_func: "futures_dce_position_rank",
        kind: ProviderKind::Mapped,
        unique_keys: &["查询参数_date", "symbol", "rank"],
        field_info: &[
            FieldInfo::float("rank", "名次"),
            FieldInfo::string("vol_party_name", "成交量会员简称"),
            FieldInfo::float("vol", "成交量"),
            FieldInfo::float("vol_chg", "成交量增减"),
            FieldInfo::string("long_party_name", "持买单会员简称"),
            FieldInfo::float("long_open_interest", "持买单量"),
            FieldInfo::float("long_open_interest_chg", "持买单量增减"),
            FieldInfo::string("short_party_name", "持卖单会员简称"),
            FieldInfo::float("short_open_interest", "持卖单量"),
            FieldInfo::float("short_open_interest_chg", "持卖单量增减"),
            FieldInfo::string("symbol", "具体合约"),
            FieldInfo::string("variety", "品种"),
            FieldInfo::string("查询参数_date", "查询日期"),
        ],
        param_mapping: &[("date", "date"), ("trade_date", "date"), ("vars_list", "vars_list")],
        required_params: &["date"],
        add_param_columns: &[("date", "查询参数_date")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "futures_gfex_position_rank",
        display_name: "广州期货交易所持仓排名",
        domain: Domain::Futures,
        akshare_func: "futures_gfex_position_rank",
        kind: ProviderKind::Mapped,
        unique_keys: &["查询参数_date", "symbol", "名次"],
        field_info: &[
            FieldInfo::string("symbol", "合约代码"),
            FieldInfo::int("名次", "排名"),
            FieldInfo::string("会员简称", "会员简称"),
            FieldInfo::int("成交量", "成交量"),
            FieldInfo::int("成交量增减", "成交量增减"),
            FieldInfo::string("查询参数_date", "查询日期"),
        ],
        param_mapping: &[("date", "date"), ("trade_date", "date"), ("vars_list", "vars_list")],
        required_params: &["date"],
        add_param_columns: &[("date", "查询参数_date")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "futures_gfex_warehouse_receipt",
        display_name: "仓单日报-广州期货交易所",
        domain: Domain::Futures,
        akshare_func: "futures_gfex_warehouse_receipt",
        kind: ProviderKind::Mapped,
        unique_keys: &["查询参数_date", "symbol", "仓库"],
        field_info: &[
            FieldInfo::string("symbol", "品种代码"),
            FieldInfo::string("仓库", "仓库名称"),
            FieldInfo::int("仓单量", "仓单数量"),
            FieldInfo::string("查询参数_date", "查询日期"),
        ],
        param_mapping: &[("date", "date"), ("trade_date", "date")],
        required_params: &["date"],
        add_param_columns: &[("date", "查询参数_date")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "futures_shfe_warehouse_receipt",
        display_name: "仓单日报-上海期货交易所",
        domain: Domain::Futures,
        akshare_func: "futures_shfe_warehouse_receipt",
        kind: ProviderKind::Mapped,
        unique_keys: &["查询参数_date", "symbol", "REGNAME", "ROWORDER"],
        field_info: &[
            FieldInfo::string("symbol", "品种名称"),
            FieldInfo::string("VARNAME", "品种名称"),
            FieldInfo::int("VARSORT", "品种排序"),
            FieldInfo::string("REGNAME", "地区名称"),
            FieldInfo::int("REGSORT", "地区排序"),
            FieldInfo::string("WHABBRNAME", "仓库简称"),
            FieldInfo::int("WRTNUM", "仓单数量"),
            FieldInfo::int("WRTWGHTS", "仓单重量"),
            FieldInfo::int("WRTCHANGE", "仓单变化"),
            FieldInfo::int("ROWORDER", "行序号"),
            FieldInfo::int("ROWSTATUS", "行状态"),
            FieldInfo::string("查询参数_date", "查询日期"),
        ],
        param_mapping: &[("date", "date"), ("trade_date", "date")],
        required_params: &["date"],
        add_param_columns: &[("date", "查询参数_date")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "futures_warehouse_receipt_czce",
        display_name: "仓单日报-郑州商品交易所",
        domain: Domain::Futures,
        akshare_func: "futures_warehouse_receipt_czce",
        kind: ProviderKind::Mapped,
        unique_keys: &["查询参数_date", "symbol", "仓库编号"],
        field_info: &[
            FieldInfo::string("symbol", "品种代码"),
            FieldInfo::string("仓库编号", "仓库编号"),
            FieldInfo::string("仓库简称", "仓库简称"),
            FieldInfo::string("年度", "年度"),
            FieldInfo::string("等级", "等级"),
            FieldInfo::string("品牌", "品牌"),
            FieldInfo::int("仓单数量", "仓单数量"),
            FieldInfo::int("当日增减", "当日增减"),
            FieldInfo::string("有效预报", "有效预报"),
            FieldInfo::int("升贴水", "升贴水"),
            FieldInfo::string("查询参数_date", "查询日期"),
        ],
        param_mapping: &[("date", "date"), ("trade_date", "date")],
        required_params: &["date"],
        add_param_columns: &[("date", "查询参数_date")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
];
