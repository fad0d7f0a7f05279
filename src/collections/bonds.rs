//! 债券数据集合

use crate::common::UPDATED_AT_FIELD;
use crate::models::{CollectionSpec, Domain, FieldInfo, ProviderKind};

pub static COLLECTIONS: &[CollectionSpec] = &[
    CollectionSpec {
        name: "bond_zh_hs_cov_spot",
        display_name: "可转债实时行情-沪深",
        domain: Domain::Bonds,
        akshare_func: "bond_zh_hs_cov_spot",
        kind: ProviderKind::Mapped,
        unique_keys: &["代码"],
        field_info: &[
            FieldInfo::string("代码", "可转债代码"),
            FieldInfo::string("名称", "可转债名称"),
            FieldInfo::float("最新价", "最新价"),
            FieldInfo::float("涨跌幅", "涨跌幅(%)"),
            FieldInfo::float("涨跌额", "涨跌额"),
            FieldInfo::float("成交量", "成交量(手)"),
            FieldInfo::float("成交额", "成交额"),
            FieldInfo::float("今开", "今日开盘价"),
            FieldInfo::float("昨收", "昨日收盘价"),
            FieldInfo::float("最高", "最高价"),
            FieldInfo::float("最低", "最低价"),
            FieldInfo::float("申买价", "申买价"),
            FieldInfo::float("申卖价", "申卖价"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        // 接口返回英文列名
        column_renames: &[
            ("code", "代码"),
            ("name", "名称"),
            ("trade", "最新价"),
            ("pricechange", "涨跌额"),
            ("changepercent", "涨跌幅"),
            ("volume", "成交量"),
            ("amount", "成交额"),
            ("open", "今开"),
            ("settlement", "昨收"),
            ("high", "最高"),
            ("low", "最低"),
            ("buy", "申买价"),
            ("sell", "申卖价"),
        ],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "bond_zh_hs_spot",
        display_name: "沪深债券实时行情",
        domain: Domain::Bonds,
        akshare_func: "bond_zh_hs_spot",
        unique_keys: &["代码"],
        field_info: &[
            FieldInfo::string("代码", "债券代码，如sh010107"),
            FieldInfo::string("名称", "债券名称"),
            FieldInfo::float("最新价", "最新成交价"),
            FieldInfo::float("涨跌额", "涨跌额"),
            FieldInfo::float("涨跌幅", "涨跌幅(%)"),
            FieldInfo::float("买入", "买一价"),
            FieldInfo::float("卖出", "卖一价"),
            FieldInfo::float("昨收", "昨日收盘价"),
            FieldInfo::float("今开", "今日开盘价"),
            FieldInfo::float("最高", "今日最高价"),
            FieldInfo::float("最低", "今日最低价"),
            FieldInfo::int("成交量", "成交量(手)"),
            FieldInfo::int("成交额", "成交额(万)"),
        ],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "bond_zh_us_rate",
        display_name: "中美国债收益率",
        domain: Domain::Bonds,
        akshare_func: "bond_zh_us_rate",
        unique_keys: &["日期"],
        field_info: &[
            FieldInfo::date("日期", "日期"),
            FieldInfo::float("中国国债收益率2年", "中国国债2年期收益率"),
            FieldInfo::float("中国国债收益率5年", "中国国债5年期收益率"),
            FieldInfo::float("中国国债收益率10年", "中国国债10年期收益率"),
            FieldInfo::float("中国国债收益率30年", "中国国债30年期收益率"),
            FieldInfo::float("中国国债收益率10年-2年", "中国国债10年-2年利差"),
            FieldInfo::float("中国GDP年增率", "中国GDP年增率"),
            FieldInfo::float("美国国债收益率2年", "美国国债2年期收益率"),
            FieldInfo::float("美国国债收益率5年", "美国国债5年期收益率"),
            FieldInfo::float("美国国债收益率10年", "美国国债10年期收益率"),
            FieldInfo::float("美国国债收益率30年", "美国国债30年期收益率"),
            FieldInfo::float("美国国债收益率10年-2年", "美国国债10年-2年利差"),
            FieldInfo::float("美国GDP年增率", "美国GDP年增率"),
        ],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "bond_cb_jsl",
        display_name: "可转债实时数据-集思录",
        domain: Domain::Bonds,
        akshare_func: "bond_cb_jsl",
        unique_keys: &["代码"],
        field_info: &[
            FieldInfo::string("代码", "可转债代码"),
            FieldInfo::string("转债名称", "可转债名称"),
            FieldInfo::float("现价", "可转债现价"),
            FieldInfo::float("涨跌幅", "涨跌幅(%)"),
            FieldInfo::string("正股代码", "正股代码"),
            FieldInfo::string("正股名称", "正股名称"),
            FieldInfo::float("正股价", "正股价格"),
            FieldInfo::float("转股价", "转股价"),
            FieldInfo::float("转股价值", "转股价值"),
            FieldInfo::float("转股溢价率", "转股溢价率(%)"),
            FieldInfo::string("债券评级", "债券评级"),
            FieldInfo::string("到期时间", "到期时间"),
            FieldInfo::float("剩余年限", "剩余年限"),
            FieldInfo::float("剩余规模", "剩余规模(亿元)"),
            FieldInfo::float("成交额", "成交额(万元)"),
            FieldInfo::float("双低", "双低值"),
        ],
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "bond_cb_index_jsl",
        display_name: "可转债等权指数-集思录",
        domain: Domain::Bonds,
        akshare_func: "bond_cb_index_jsl",
        unique_keys: &["price_dt"],
        field_info: &[
            FieldInfo::date("price_dt", "日期"),
            FieldInfo::float("price", "指数"),
            FieldInfo::float("amount", "剩余规模(亿元)"),
            FieldInfo::float("volume", "成交额(亿元)"),
            FieldInfo::int("count", "数量"),
            FieldInfo::float("increase_val", "涨跌"),
            FieldInfo::float("increase_rt", "涨幅"),
            FieldInfo::float("avg_price", "平均价格(元)"),
            FieldInfo::float("mid_price", "中位数价格(元)"),
            FieldInfo::float("mid_convert_value", "中位数转股价值"),
            FieldInfo::float("avg_dblow", "平均双低"),
            FieldInfo::float("avg_premium_rt", "平均溢价率"),
            FieldInfo::float("mid_premium_rt", "中位数溢价率"),
            FieldInfo::float("avg_ytm_rt", "平均收益率"),
            FieldInfo::float("turnover_rt", "换手率"),
            FieldInfo::int("price_90", ">90数量"),
            FieldInfo::int("price_90_100", "90~100数量"),
            FieldInfo::int("price_100_110", "100~110数量"),
            FieldInfo::int("price_110_120", "110~120数量"),
            FieldInfo::int("price_120_130", "120~130数量"),
            FieldInfo::int("price_130", ">130数量"),
            FieldInfo::float("idx_price", "沪深300指数"),
            FieldInfo::float("idx_increase_rt", "沪深300指数涨幅"),
        ],
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "bond_cb_redeem_jsl",
        display_name: "可转债强赎-集思录",
        domain: Domain::Bonds,
        akshare_func: "bond_cb_redeem_jsl",
        unique_keys: &["代码"],
        field_info: &[
            FieldInfo::string("代码", "可转债代码"),
            FieldInfo::string("名称", "可转债名称"),
            FieldInfo::float("现价", "可转债现价"),
            FieldInfo::string("正股代码", "正股代码"),
            FieldInfo::string("正股名称", "正股名称"),
            FieldInfo::float("规模", "规模(亿)"),
            FieldInfo::float("剩余规模", "剩余规模"),
            FieldInfo::string("转股起始日", "转股起始日"),
            FieldInfo::string("最后交易日", "最后交易日"),
            FieldInfo::string("到期日", "到期日"),
            FieldInfo::float("转股价", "转股价"),
            FieldInfo::int("强赎触发比", "强赎触发比(%)"),
            FieldInfo::float("强赎触发价", "强赎触发价"),
            FieldInfo::float("正股价", "正股价"),
            FieldInfo::float("强赎价", "强赎价"),
            FieldInfo::string("强赎天计数", "强赎天计数"),
            FieldInfo::string("强赎条款", "强赎条款"),
            FieldInfo::string("强赎状态", "强赎状态"),
        ],
        ..CollectionSpec::EMPTY
    },
    // 收益率曲线不含债券类型和期限间隔，从参数写入
    CollectionSpec {
        name: "bond_china_close_return",
        display_name: "收益率曲线历史数据",
        domain: Domain::Bonds,
        akshare_func: "bond_china_close_return",
        kind: ProviderKind::Mapped,
        unique_keys: &["债券类型", "期限间隔", "日期", "期限"],
        field_info: &[
            FieldInfo::string("债券类型", "债券类型"),
            FieldInfo::string("期限间隔", "期限间隔"),
            FieldInfo::date("日期", "日期"),
            FieldInfo::float("期限", "期限(年)"),
            FieldInfo::float("到期收益率", "到期收益率(%)"),
            FieldInfo::float("即期收益率", "即期收益率(%)"),
            FieldInfo::float("远期收益率", "远期收益率(%)"),
        ],
        param_mapping: &[
            ("symbol", "symbol"),
            ("bond_type", "symbol"),
            ("period", "period"),
            ("start_date", "start_date"),
            ("end_date", "end_date"),
        ],
        default_params: &[("symbol", "国债"), ("period", "1")],
        required_params: &["symbol", "period"],
        add_param_columns: &[("symbol", "债券类型"), ("period", "期限间隔")],
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "bond_composite_index_cbond",
        display_name: "中债综合指数",
        domain: Domain::Bonds,
        akshare_func: "bond_composite_index_cbond",
        kind: ProviderKind::Mapped,
        unique_keys: &["指标类型", "期限", "date"],
        field_info: &[
            FieldInfo::string("指标类型", "指标类型"),
            FieldInfo::string("期限", "期限"),
            FieldInfo::date("date", "日期"),
            FieldInfo::float("value", "指数值"),
        ],
        param_mapping: &[("indicator", "indicator"), ("period", "period")],
        default_params: &[("indicator", "财富"), ("period", "总值")],
        required_params: &["indicator", "period"],
        add_param_columns: &[("indicator", "指标类型"), ("period", "期限")],
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "bond_corporate_issue_cninfo",
        display_name: "企业债发行",
        domain: Domain::Bonds,
        akshare_func: "bond_corporate_issue_cninfo",
        kind: ProviderKind::Mapped,
        unique_keys: &["债券代码"],
        field_info: &[
            FieldInfo::string("债券代码", "债券代码"),
            FieldInfo::string("债券简称", "债券简称"),
            FieldInfo::string("公告日期", "公告日期"),
            FieldInfo::string("交易所网上发行起始日", "网上发行起始日"),
            FieldInfo::string("交易所网上发行终止日", "网上发行终止日"),
            FieldInfo::float("计划发行总量", "计划发行总量(万元)"),
            FieldInfo::float("实际发行总量", "实际发行总量(万元)"),
            FieldInfo::float("发行面值", "发行面值"),
            FieldInfo::float("发行价格", "发行价格(元)"),
            FieldInfo::string("发行方式", "发行方式"),
            FieldInfo::string("发行对象", "发行对象"),
            FieldInfo::string("发行范围", "发行范围"),
            FieldInfo::string("承销方式", "承销方式"),
            FieldInfo::float("最小认购单位", "最小认购单位(万元)"),
            FieldInfo::string("募资用途说明", "募资用途说明"),
            FieldInfo::float("最低认购额", "最低认购额(万元)"),
            FieldInfo::string("债券名称", "债券名称"),
        ],
        param_mapping: &[("start_date", "start_date"), ("end_date", "end_date")],
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "bond_cov_comparison",
        display_name: "可转债比价表",
        domain: Domain::Bonds,
        akshare_func: "bond_cov_comparison",
        unique_keys: &["转债代码"],
        field_info: &[
            FieldInfo::int("序号", "序号"),
            FieldInfo::string("转债代码", "可转债代码"),
            FieldInfo::string("转债名称", "可转债名称"),
            FieldInfo::float("转债最新价", "转债最新价"),
            FieldInfo::float("转债涨跌幅", "转债涨跌幅(%)"),
            FieldInfo::string("正股代码", "正股代码"),
            FieldInfo::string("正股名称", "正股名称"),
            FieldInfo::float("正股最新价", "正股最新价"),
            FieldInfo::float("正股涨跌幅", "正股涨跌幅(%)"),
            FieldInfo::float("转股价", "转股价"),
            FieldInfo::float("转股价值", "转股价值"),
            FieldInfo::float("转股溢价率", "转股溢价率(%)"),
            FieldInfo::float("纯债溢价率", "纯债溢价率(%)"),
            FieldInfo::float("回售触发价", "回售触发价"),
            FieldInfo::float("强赎触发价", "强赎触发价"),
            FieldInfo::float("到期赎回价", "到期赎回价"),
            FieldInfo::float("纯债价值", "纯债价值"),
            FieldInfo::string("开始转股日", "开始转股日"),
            FieldInfo::string("上市日期", "上市日期"),
            FieldInfo::string("申购日期", "申购日期"),
        ],
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "bond_info_cm",
        display_name: "债券信息查询",
        domain: Domain::Bonds,
        akshare_func: "bond_info_cm",
        kind: ProviderKind::Mapped,
        unique_keys: &["债券代码", "债券简称"],
        field_info: &[
            FieldInfo::string("债券代码", "债券代码"),
            FieldInfo::string("债券简称", "债券简称"),
            FieldInfo::string("债券类型", "债券类型"),
            FieldInfo::string("发行人/受托机构", "发行人"),
            FieldInfo::string("发行日期", "发行日期"),
            FieldInfo::string("最新债项评级", "最新债项评级"),
            FieldInfo::datetime("更新时间", "更新时间"),
        ],
        // 查询条件全部可选
        param_mapping: &[
            ("bond_name", "bond_name"),
            ("bond_code", "bond_code"),
            ("bond_issue", "bond_issue"),
            ("bond_type", "bond_type"),
            ("coupon_type", "coupon_type"),
            ("issue_year", "issue_year"),
            ("underwriter", "underwriter"),
            ("grade", "grade"),
        ],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "bond_treasure_issue_cninfo",
        display_name: "国债发行",
        domain: Domain::Bonds,
        akshare_func: "bond_treasure_issue_cninfo",
        kind: ProviderKind::Mapped,
        unique_keys: &["债券代码"],
        field_info: &[
            FieldInfo::string("债券代码", "债券代码"),
            FieldInfo::string("债券简称", "债券简称"),
            FieldInfo::string("发行起始日", "发行起始日"),
            FieldInfo::string("发行终止日", "发行终止日"),
            FieldInfo::float("计划发行总量", "计划发行总量(亿元)"),
            FieldInfo::float("实际发行总量", "实际发行总量(亿元)"),
            FieldInfo::float("发行价格", "发行价格(元)"),
            FieldInfo::int("单位面值", "单位面值(元)"),
            FieldInfo::string("缴款日", "缴款日"),
            FieldInfo::int("增发次数", "增发次数"),
            FieldInfo::string("交易市场", "交易市场"),
            FieldInfo::string("发行方式", "发行方式"),
            FieldInfo::string("发行对象", "发行对象"),
            FieldInfo::string("公告日期", "公告日期"),
            FieldInfo::string("债券名称", "债券名称"),
        ],
        param_mapping: &[("start_date", "start_date"), ("end_date", "end_date")],
        ..CollectionSpec::EMPTY
    },
    // 每个指标返回的列不同，代码和指标从参数写入
    CollectionSpec {
        name: "bond_zh_cov_info",
        display_name: "可转债详情-东财",
        domain: Domain::Bonds,
        akshare_func: "bond_zh_cov_info",
        kind: ProviderKind::Mapped,
        unique_keys: &["可转债代码", "查询指标"],
        field_info: &[
            FieldInfo::string("可转债代码", "查询的可转债代码"),
            FieldInfo::string("查询指标", "基本信息/中签号/筹资用途/重要日期"),
            FieldInfo::string("SECURITY_CODE", "可转债代码"),
            FieldInfo::string("SECUCODE", "证券代码"),
            FieldInfo::string("TRADE_MARKET", "交易市场"),
            FieldInfo::string("SECURITY_NAME_ABBR", "可转债简称"),
            FieldInfo::string("BOND_EXPIRE", "债券期限"),
            FieldInfo::string("INTEREST_RATE_EXPLAIN", "利率说明"),
            FieldInfo::string("CONVERT_STOCK_CODE", "正股代码"),
            FieldInfo::string("CONVERT_STOCK_NAME", "正股名称"),
            FieldInfo::float("CONVERT_STOCK_PRICE", "正股价格"),
            FieldInfo::float("TRANSFER_PRICE", "转股价"),
            FieldInfo::float("TRANSFER_VALUE", "转股价值"),
            FieldInfo::string("IS_CONVERT_STOCK", "是否可转股"),
            FieldInfo::string("IS_REDEEM", "是否赎回"),
            FieldInfo::string("IS_SELLBACK", "是否回售"),
        ],
        param_mapping: &[
            ("symbol", "symbol"),
            ("bond_code", "symbol"),
            ("code", "symbol"),
            ("indicator", "indicator"),
        ],
        default_params: &[("indicator", "基本信息")],
        required_params: &["symbol", "indicator"],
        add_param_columns: &[("symbol", "可转债代码"), ("indicator", "查询指标")],
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "bond_zh_cov_info_ths",
        display_name: "可转债详情-同花顺",
        domain: Domain::Bonds,
        akshare_func: "bond_zh_cov_info_ths",
        unique_keys: &["债券代码"],
        field_info: &[
            FieldInfo::string("债券代码", "可转债代码"),
            FieldInfo::string("债券简称", "可转债简称"),
            FieldInfo::string("申购日期", "申购日期"),
            FieldInfo::string("申购代码", "申购代码"),
            FieldInfo::string("原股东配售码", "原股东配售码"),
            FieldInfo::float("每股获配额", "每股获配额"),
            FieldInfo::float("计划发行量", "计划发行量"),
            FieldInfo::float("实际发行量", "实际发行量"),
            FieldInfo::string("中签公布日", "中签公布日"),
            FieldInfo::string("中签号", "中签号"),
            FieldInfo::string("上市日期", "上市日期"),
            FieldInfo::string("正股代码", "正股代码"),
            FieldInfo::string("正股简称", "正股简称"),
            FieldInfo::float("转股价格", "转股价格"),
            FieldInfo::string("到期时间", "到期时间"),
            FieldInfo::string("中签率", "中签率(%)"),
        ],
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "bond_zh_hs_cov_min",
        display_name: "可转债分时行情",
        domain: Domain::Bonds,
        akshare_func: "bond_zh_hs_cov_min",
        kind: ProviderKind::Mapped,
        unique_keys: &["可转债代码", "周期", "时间"],
        field_info: &[
            FieldInfo::string("可转债代码", "可转债代码，如sz123106"),
            FieldInfo::string("周期", "1/5/15/30/60 分钟"),
            FieldInfo::datetime("时间", "时间"),
            FieldInfo::float("开盘", "开盘价"),
            FieldInfo::float("收盘", "收盘价"),
            FieldInfo::float("最高", "最高价"),
            FieldInfo::float("最低", "最低价"),
            FieldInfo::float("成交量", "成交量(手)"),
            FieldInfo::float("成交额", "成交额"),
            FieldInfo::float("最新价", "最新价"),
            FieldInfo::float("涨跌幅", "涨跌幅(%)，非1分钟时有"),
            FieldInfo::float("涨跌额", "涨跌额，非1分钟时有"),
            FieldInfo::float("振幅", "振幅(%)，非1分钟时有"),
            FieldInfo::float("换手率", "换手率(%)，非1分钟时有"),
        ],
        param_mapping: &[
            ("symbol", "symbol"),
            ("bond_code", "symbol"),
            ("code", "symbol"),
            ("period", "period"),
            ("adjust", "adjust"),
            ("start_date", "start_date"),
            ("end_date", "end_date"),
        ],
        default_params: &[("period", "1")],
        required_params: &["symbol", "period"],
        add_param_columns: &[("symbol", "可转债代码"), ("period", "周期")],
        ..CollectionSpec::EMPTY
    },
];
