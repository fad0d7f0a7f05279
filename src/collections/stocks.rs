//! 股票数据集合

use crate::common::UPDATED_AT_FIELD;
use crate::models::{CollectionSpec, Domain, FieldInfo, ProviderKind};

pub static COLLECTIONS: &[CollectionSpec] = &[
    CollectionSpec {
        name: "stock_bj_a_spot_em",
        display_name: "京 A 股",
        domain: Domain::Stocks,
        akshare_func: "stock_bj_a_spot_em",
        unique_keys: &["代码"],
        field_info: &[
            FieldInfo::int("序号", "-"),
            FieldInfo::string("代码", "-"),
            FieldInfo::string("名称", "-"),
            FieldInfo::float("最新价", "-"),
            FieldInfo::float("涨跌幅", "注意单位: %"),
            FieldInfo::float("涨跌额", "-"),
            FieldInfo::float("成交量", "注意单位: 手"),
            FieldInfo::float("成交额", "注意单位: 元"),
            FieldInfo::float("振幅", "注意单位: %"),
            FieldInfo::float("最高", "-"),
            FieldInfo::float("最低", "-"),
            FieldInfo::float("今开", "-"),
            FieldInfo::float("昨收", "-"),
            FieldInfo::float("量比", "-"),
            FieldInfo::float("换手率", "注意单位: %"),
            FieldInfo::float("市盈率-动态", "-"),
            FieldInfo::float("市净率", "-"),
            FieldInfo::float("总市值", "注意单位: 元"),
            FieldInfo::float("流通市值", "注意单位: 元"),
            FieldInfo::float("涨速", "-"),
            FieldInfo::float("5分钟涨跌", "注意单位: %"),
            FieldInfo::float("60日涨跌幅", "注意单位: %"),
            FieldInfo::float("年初至今涨跌幅", "注意单位: %"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    // 分时数据不含代码列，代码和周期从参数写入
    CollectionSpec {
        name: "stock_zh_a_hist_min_em",
        display_name: "分时数据-东财",
        domain: Domain::Stocks,
        akshare_func: "stock_zh_a_hist_min_em",
        kind: ProviderKind::Mapped,
        unique_keys: &["代码", "周期", "时间"],
        field_info: &[
            FieldInfo::string("代码", "股票代码"),
            FieldInfo::string("周期", "分钟周期"),
            FieldInfo::string("时间", "-"),
            FieldInfo::float("开盘", "-"),
            FieldInfo::float("收盘", "-"),
            FieldInfo::float("最高", "-"),
            FieldInfo::float("最低", "-"),
            FieldInfo::float("涨跌幅", "注意单位: %"),
            FieldInfo::float("涨跌额", "-"),
            FieldInfo::float("成交量", "注意单位: 手"),
            FieldInfo::float("成交额", "-"),
            FieldInfo::float("振幅", "注意单位: %"),
            FieldInfo::float("换手率", "注意单位: %"),
            FieldInfo::float("均价", "-"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[
            ("symbol", "symbol"),
            ("code", "symbol"),
            ("stock_code", "symbol"),
            ("start_date", "start_date"),
            ("end_date", "end_date"),
            ("period", "period"),
            ("adjust", "adjust"),
        ],
        required_params: &["symbol", "period"],
        add_param_columns: &[("symbol", "代码"), ("period", "周期")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "stock_hk_hist",
        display_name: "港股历史行情数据-东财",
        domain: Domain::Stocks,
        akshare_func: "stock_hk_hist",
        kind: ProviderKind::Mapped,
        unique_keys: &["代码", "周期", "日期"],
        field_info: &[
            FieldInfo::string("代码", "港股代码"),
            FieldInfo::string("周期", "daily/weekly/monthly"),
            FieldInfo::date("日期", "-"),
            FieldInfo::float("开盘", "注意单位: 港元"),
            FieldInfo::float("收盘", "注意单位: 港元"),
            FieldInfo::float("最高", "注意单位: 港元"),
            FieldInfo::float("最低", "注意单位: 港元"),
            FieldInfo::int("成交量", "注意单位: 股"),
            FieldInfo::float("成交额", "注意单位: 港元"),
            FieldInfo::float("振幅", "注意单位: %"),
            FieldInfo::float("涨跌幅", "注意单位: %"),
            FieldInfo::float("涨跌额", "注意单位: 港元"),
            FieldInfo::float("换手率", "注意单位: %"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[
            ("symbol", "symbol"),
            ("code", "symbol"),
            ("stock_code", "symbol"),
            ("period", "period"),
            ("start_date", "start_date"),
            ("end_date", "end_date"),
            ("adjust", "adjust"),
        ],
        required_params: &["symbol", "period", "start_date", "end_date"],
        add_param_columns: &[("symbol", "代码"), ("period", "周期")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "stock_a_ttm_lyr",
        display_name: "A 股等权重与中位数市盈率",
        domain: Domain::Stocks,
        akshare_func: "stock_a_ttm_lyr",
        unique_keys: &["date"],
        field_info: &[
            FieldInfo::date("date", "日期"),
            FieldInfo::float("middlePETTM", "全A股滚动市盈率(TTM)中位数"),
            FieldInfo::float("averagePETTM", "全A股滚动市盈率(TTM)等权平均"),
            FieldInfo::float("middlePELYR", "全A股静态市盈率(LYR)中位数"),
            FieldInfo::float("averagePELYR", "全A股静态市盈率(LYR)等权平均"),
            FieldInfo::float("close", "沪深300指数"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "stock_allotment_cninfo",
        display_name: "配股实施方案-巨潮资讯",
        domain: Domain::Stocks,
        akshare_func: "stock_allotment_cninfo",
        kind: ProviderKind::Mapped,
        unique_keys: &["证券代码", "记录标识"],
        field_info: &[
            FieldInfo::int("记录标识", "-"),
            FieldInfo::string("证券简称", "-"),
            FieldInfo::string("停牌起始日", "-"),
            FieldInfo::string("上市公告日期", "-"),
            FieldInfo::string("配股缴款起始日", "-"),
            FieldInfo::float("可转配股数量", "-"),
            FieldInfo::string("停牌截止日", "-"),
            FieldInfo::float("实际配股数量", "-"),
            FieldInfo::float("配股价格", "-"),
            FieldInfo::float("配股比例", "-"),
            FieldInfo::float("配股前总股本", "-"),
            FieldInfo::float("每股配权转让费(元)", "-"),
            FieldInfo::float("法人股实配数量", "-"),
            FieldInfo::float("实际募资净额", "-"),
            FieldInfo::string("大股东认购方式", "-"),
            FieldInfo::string("其他配售简称", "-"),
            FieldInfo::string("发行方式", "-"),
            FieldInfo::string("配股失败，退还申购款日期", "-"),
            FieldInfo::string("除权基准日", "-"),
            FieldInfo::float("预计发行费用", "-"),
            FieldInfo::string("配股发行结果公告日", "-"),
            FieldInfo::string("证券代码", "-"),
            FieldInfo::string("配股权证交易截止日", "-"),
            FieldInfo::float("其他股份实配数量", "-"),
            FieldInfo::float("国家股实配数量", "-"),
            FieldInfo::string("委托单位", "-"),
            FieldInfo::float("公众获转配数量", "-"),
            FieldInfo::string("其他配售代码", "-"),
            FieldInfo::string("配售对象", "-"),
            FieldInfo::string("配股权证交易起始日", "-"),
            FieldInfo::string("资金到账日", "-"),
            FieldInfo::string("股权登记日", "-"),
            FieldInfo::float("实际募资总额", "-"),
            FieldInfo::float("预计募集资金", "-"),
            FieldInfo::float("大股东认购数量", "-"),
            FieldInfo::float("公众股实配数量", "-"),
            FieldInfo::float("转配股实配数量", "-"),
            FieldInfo::float("承销费用", "-"),
            FieldInfo::float("法人获转配数量", "-"),
            FieldInfo::float("配股后流通股本", "-"),
            FieldInfo::string("股票类别", "-"),
            FieldInfo::string("公众配售简称", "-"),
            FieldInfo::string("发行方式编码", "-"),
            FieldInfo::string("承销方式", "-"),
            FieldInfo::string("公告日期", "-"),
            FieldInfo::string("配股上市日", "-"),
            FieldInfo::string("配股缴款截止日", "-"),
            FieldInfo::float("承销余额(股)", "-"),
            FieldInfo::float("预计配股数量", "-"),
            FieldInfo::float("配股后总股本", "-"),
            FieldInfo::float("职工股实配数量", "-"),
            FieldInfo::string("承销方式编码", "-"),
            FieldInfo::float("发行费用总额", "-"),
            FieldInfo::float("配股前流通股本", "-"),
            FieldInfo::string("股票类别编码", "-"),
            FieldInfo::string("公众配售代码", "-"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[
            ("symbol", "symbol"),
            ("code", "symbol"),
            ("stock_code", "symbol"),
            ("start_date", "start_date"),
            ("end_date", "end_date"),
        ],
        required_params: &["symbol", "start_date", "end_date"],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    // symbol 是市场类型：A股/B股/基金/债券
    CollectionSpec {
        name: "stock_dzjy_mrmx",
        display_name: "大宗交易每日明细",
        domain: Domain::Stocks,
        akshare_func: "stock_dzjy_mrmx",
        kind: ProviderKind::Mapped,
        unique_keys: &["交易日期", "证券代码", "成交价", "成交量", "买方营业部", "卖方营业部"],
        field_info: &[
            FieldInfo::string("交易日期", "-"),
            FieldInfo::string("证券代码", "-"),
            FieldInfo::string("证券简称", "-"),
            FieldInfo::float("涨跌幅", "注意单位: %"),
            FieldInfo::float("收盘价", "-"),
            FieldInfo::float("成交价", "-"),
            FieldInfo::float("折溢率", "-"),
            FieldInfo::float("成交量", "注意单位: 股"),
            FieldInfo::float("成交额", "注意单位: 元"),
            FieldInfo::float("成交额/流通市值", "注意单位: %"),
            FieldInfo::string("买方营业部", "-"),
            FieldInfo::string("卖方营业部", "-"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[
            ("symbol", "symbol"),
            ("market", "symbol"),
            ("start_date", "start_date"),
            ("end_date", "end_date"),
        ],
        default_params: &[("symbol", "A股")],
        required_params: &["symbol", "start_date", "end_date"],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "stock_fhps_detail_em",
        display_name: "分红配送详情-东财",
        domain: Domain::Stocks,
        akshare_func: "stock_fhps_detail_em",
        kind: ProviderKind::Mapped,
        unique_keys: &["代码", "报告期"],
        field_info: &[
            FieldInfo::string("代码", "股票代码"),
            FieldInfo::string("报告期", "-"),
            FieldInfo::string("业绩披露日期", "-"),
            FieldInfo::float("送转股份-送转总比例", "-"),
            FieldInfo::float("送转股份-送股比例", "-"),
            FieldInfo::float("送转股份-转股比例", "-"),
            FieldInfo::float("现金分红-现金分红比例", "-"),
            FieldInfo::string("现金分红-现金分红比例描述", "-"),
            FieldInfo::float("现金分红-股息率", "-"),
            FieldInfo::float("每股收益", "-"),
            FieldInfo::float("每股净资产", "-"),
            FieldInfo::float("每股公积金", "-"),
            FieldInfo::float("每股未分配利润", "-"),
            FieldInfo::float("净利润同比增长", "-"),
            FieldInfo::int("总股本", "-"),
            FieldInfo::string("预案公告日", "-"),
            FieldInfo::string("股权登记日", "-"),
            FieldInfo::string("除权除息日", "-"),
            FieldInfo::string("方案进度", "-"),
            FieldInfo::string("最新公告日期", "-"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[("symbol", "symbol"), ("code", "symbol"), ("stock_code", "symbol")],
        required_params: &["symbol"],
        add_param_columns: &[("symbol", "代码")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "stock_financial_abstract_ths",
        display_name: "关键指标-同花顺",
        domain: Domain::Stocks,
        akshare_func: "stock_financial_abstract_ths",
        kind: ProviderKind::Mapped,
        unique_keys: &["代码", "指标", "报告期"],
        field_info: &[
            FieldInfo::string("代码", "股票代码"),
            FieldInfo::string("指标", "按报告期/按年度/按单季度"),
            FieldInfo::string("报告期", "-"),
            FieldInfo::string("净利润", "-"),
            FieldInfo::string("净利润同比增长率", "-"),
            FieldInfo::string("扣非净利润", "-"),
            FieldInfo::string("扣非净利润同比增长率", "-"),
            FieldInfo::string("营业总收入", "-"),
            FieldInfo::string("营业总收入同比增长率", "-"),
            FieldInfo::string("基本每股收益", "-"),
            FieldInfo::string("每股净资产", "-"),
            FieldInfo::string("每股资本公积金", "-"),
            FieldInfo::string("每股未分配利润", "-"),
            FieldInfo::string("每股经营现金流", "-"),
            FieldInfo::string("销售净利率", "-"),
            FieldInfo::string("销售毛利率", "-"),
            FieldInfo::string("净资产收益率", "-"),
            FieldInfo::string("净资产收益率-摊薄", "-"),
            FieldInfo::string("营业周期", "-"),
            FieldInfo::string("存货周转率", "-"),
            FieldInfo::string("存货周转天数", "-"),
            FieldInfo::string("应收账款周转天数", "-"),
            FieldInfo::string("流动比率", "-"),
            FieldInfo::string("速动比率", "-"),
            FieldInfo::string("保守速动比率", "-"),
            FieldInfo::string("产权比率", "-"),
            FieldInfo::string("资产负债率", "-"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[
            ("symbol", "symbol"),
            ("code", "symbol"),
            ("stock_code", "symbol"),
            ("indicator", "indicator"),
        ],
        default_params: &[("indicator", "按报告期")],
        required_params: &["symbol", "indicator"],
        add_param_columns: &[("symbol", "代码"), ("indicator", "指标")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "stock_financial_analysis_indicator_em",
        display_name: "主要指标-东方财富",
        domain: Domain::Stocks,
        akshare_func: "stock_financial_analysis_indicator_em",
        kind: ProviderKind::Mapped,
        unique_keys: &["SECUCODE", "REPORT_DATE", "指标"],
        field_info: &[
            FieldInfo::string("指标", "按报告期/按单季度"),
            FieldInfo::string("SECUCODE", "股票代码(带后缀)"),
            FieldInfo::string("SECURITY_CODE", "股票代码"),
            FieldInfo::string("REPORT_DATE", "报告日期"),
            FieldInfo::string("REPORT_TYPE", "报告类型"),
            FieldInfo::float("EPSJB", "基本每股收益(元)"),
            FieldInfo::float("EPSKCJB", "扣非每股收益(元)"),
            FieldInfo::float("EPSXS", "稀释每股收益(元)"),
            FieldInfo::float("BPS", "每股净资产(元)"),
            FieldInfo::float("MGZBGJ", "每股公积金(元)"),
            FieldInfo::float("MGWFPLR", "每股未分配利润(元)"),
            FieldInfo::float("MGJYXJJE", "每股经营现金流(元)"),
            FieldInfo::float("TOTALOPERATEREVE", "营业总收入(元)"),
            FieldInfo::float("MLR", "毛利润(元)"),
            FieldInfo::float("PARENTNETPROFIT", "归属净利润(元)"),
            FieldInfo::float("KCFJCXSYJLR", "扣非净利润(元)"),
            FieldInfo::float("TOTALOPERATEREVETZ", "营业总收入同比增长(%)"),
            FieldInfo::float("PARENTNETPROFITTZ", "归属净利润同比增长(%)"),
            FieldInfo::float("KCFJCXSYJLRTZ", "扣非净利润同比增长(%)"),
            FieldInfo::float("YYZSRGDHBZC", "营业总收入滚动环比增长(%)"),
            FieldInfo::float("NETPROFITRPHBZC", "归属净利润滚动环比增长(%)"),
            FieldInfo::float("KFJLRGDHBZC", "扣非净利润滚动环比增长(%)"),
            FieldInfo::float("ROEJQ", "净资产收益率(加权)(%)"),
            FieldInfo::float("ROEKCJQ", "净资产收益率(扣非/加权)(%)"),
            FieldInfo::float("ZZCJLL", "总资产收益率(加权)(%)"),
            FieldInfo::float("XSJLL", "净利率(%)"),
            FieldInfo::float("XSMLL", "毛利率(%)"),
            FieldInfo::float("YSZKYYSR", "预收账款/营业收入"),
            FieldInfo::float("XSJXLYYSR", "销售净现金流/营业收入"),
            FieldInfo::float("JYXJLYYSR", "经营净现金流/营业收入"),
            FieldInfo::float("TAXRATE", "实际税率(%)"),
            FieldInfo::float("LD", "流动比率"),
            FieldInfo::float("SD", "速动比率"),
            FieldInfo::float("XJLLB", "现金流量比率"),
            FieldInfo::float("ZCFZL", "资产负债率(%)"),
            FieldInfo::float("QYCS", "权益系数"),
            FieldInfo::float("CQBL", "产权比率"),
            FieldInfo::float("ZZCZZTS", "总资产周转天数(天)"),
            FieldInfo::float("CHZZTS", "存货周转天数(天)"),
            FieldInfo::float("YSZKZZTS", "应收账款周转天数(天)"),
            FieldInfo::float("TOAZZL", "总资产周转率(次)"),
            FieldInfo::float("CHZZL", "存货周转率(次)"),
            FieldInfo::float("YSZKZZL", "应收账款周转率(次)"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[
            ("symbol", "symbol"),
            ("code", "symbol"),
            ("stock_code", "symbol"),
            ("indicator", "indicator"),
        ],
        default_params: &[("indicator", "按报告期")],
        required_params: &["symbol", "indicator"],
        add_param_columns: &[("indicator", "指标")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "stock_financial_hk_analysis_indicator_em",
        display_name: "港股财务指标",
        domain: Domain::Stocks,
        akshare_func: "stock_financial_hk_analysis_indicator_em",
        kind: ProviderKind::Mapped,
        unique_keys: &["SECUCODE", "REPORT_DATE", "指标"],
        field_info: &[
            FieldInfo::string("指标", "年度/报告期"),
            FieldInfo::string("SECUCODE", "股票代码(带HK后缀)"),
            FieldInfo::string("SECURITY_CODE", "股票代码(不带HK后缀)"),
            FieldInfo::string("ORG_CODE", "ORG_CODE"),
            FieldInfo::string("REPORT_DATE", "报告日期"),
            FieldInfo::string("DATE_TYPE_CODE", "报告日期类型"),
            FieldInfo::float("PER_NETCASH_OPERATE", "每股经营现金流(元)"),
            FieldInfo::float("PER_OI", "每股营业收入(元)"),
            FieldInfo::float("BPS", "每股净资产(元)"),
            FieldInfo::float("BASIC_EPS", "基本每股收益(元)"),
            FieldInfo::float("DILUTED_EPS", "稀释每股收益(元)"),
            FieldInfo::int("OPERATE_INCOME", "营业总收入(元)"),
            FieldInfo::float("OPERATE_INCOME_YOY", "营业总收入同比增长(%)"),
            FieldInfo::int("GROSS_PROFIT", "毛利润(元)"),
            FieldInfo::float("GROSS_PROFIT_YOY", "毛利润同比增长(%)"),
            FieldInfo::int("HOLDER_PROFIT", "归母净利润(元)"),
            FieldInfo::float("HOLDER_PROFIT_YOY", "归母净利润同比增长(%)"),
            FieldInfo::float("GROSS_PROFIT_RATIO", "毛利率(%)"),
            FieldInfo::float("EPS_TTM", "TTM每股收益(元)"),
            FieldInfo::float("OPERATE_INCOME_QOQ", "营业总收入滚动环比增长(%)"),
            FieldInfo::float("NET_PROFIT_RATIO", "净利率(%)"),
            FieldInfo::float("ROE_AVG", "平均净资产收益率(%)"),
            FieldInfo::float("GROSS_PROFIT_QOQ", "毛利润滚动环比增长(%)"),
            FieldInfo::float("ROA", "总资产净利率(%)"),
            FieldInfo::float("HOLDER_PROFIT_QOQ", "归母净利润滚动环比增长(%)"),
            FieldInfo::float("ROE_YEARLY", "年化净资产收益率(%)"),
            FieldInfo::float("ROIC_YEARLY", "年化投资回报率(%)"),
            FieldInfo::float("TAX_EBT", "所得税/利润总额(%)"),
            FieldInfo::float("OCF_SALES", "经营现金流/营业收入(%)"),
            FieldInfo::float("DEBT_ASSET_RATIO", "资产负债率(%)"),
            FieldInfo::float("CURRENT_RATIO", "流动比率(倍)"),
            FieldInfo::float("CURRENTDEBT_DEBT", "流动负债/总负债(%)"),
            FieldInfo::string("START_DATE", "START_DATE"),
            FieldInfo::string("FISCAL_YEAR", "年结日"),
            FieldInfo::string("CURRENCY", "CURRENCY"),
            FieldInfo::int("IS_CNY_CODE", "IS_CNY_CODE"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[
            ("symbol", "symbol"),
            ("code", "symbol"),
            ("stock_code", "symbol"),
            ("indicator", "indicator"),
        ],
        default_params: &[("indicator", "年度")],
        required_params: &["symbol", "indicator"],
        add_param_columns: &[("indicator", "指标")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "stock_financial_us_analysis_indicator_em",
        display_name: "美股财务指标",
        domain: Domain::Stocks,
        akshare_func: "stock_financial_us_analysis_indicator_em",
        kind: ProviderKind::Mapped,
        unique_keys: &["SECUCODE", "REPORT_DATE", "指标"],
        field_info: &[
            FieldInfo::string("指标", "年报/单季报/累计季报"),
            FieldInfo::string("SECUCODE", "-"),
            FieldInfo::string("SECURITY_CODE", "-"),
            FieldInfo::string("SECURITY_NAME_ABBR", "-"),
            FieldInfo::string("ORG_CODE", "-"),
            FieldInfo::string("SECURITY_INNER_CODE", "-"),
            FieldInfo::string("ACCOUNTING_STANDARDS", "-"),
            FieldInfo::string("NOTICE_DATE", "-"),
            FieldInfo::string("START_DATE", "-"),
            FieldInfo::string("REPORT_DATE", "-"),
            FieldInfo::string("FINANCIAL_DATE", "-"),
            FieldInfo::string("STD_REPORT_DATE", "-"),
            FieldInfo::string("CURRENCY", "-"),
            FieldInfo::string("DATE_TYPE", "-"),
            FieldInfo::string("DATE_TYPE_CODE", "-"),
            FieldInfo::string("REPORT_TYPE", "-"),
            FieldInfo::string("REPORT_DATA_TYPE", "-"),
            FieldInfo::string("ORGTYPE", "-"),
            FieldInfo::float("OPERATE_INCOME", "-"),
            FieldInfo::float("OPERATE_INCOME_YOY", "-"),
            FieldInfo::float("GROSS_PROFIT", "-"),
            FieldInfo::float("GROSS_PROFIT_YOY", "-"),
            FieldInfo::int("PARENT_HOLDER_NETPROFIT", "-"),
            FieldInfo::float("PARENT_HOLDER_NETPROFIT_YOY", "-"),
            FieldInfo::float("BASIC_EPS", "-"),
            FieldInfo::float("DILUTED_EPS", "-"),
            FieldInfo::float("GROSS_PROFIT_RATIO", "-"),
            FieldInfo::float("NET_PROFIT_RATIO", "-"),
            FieldInfo::float("ACCOUNTS_RECE_TR", "-"),
            FieldInfo::float("INVENTORY_TR", "-"),
            FieldInfo::float("TOTAL_ASSETS_TR", "-"),
            FieldInfo::float("ACCOUNTS_RECE_TDAYS", "-"),
            FieldInfo::float("INVENTORY_TDAYS", "-"),
            FieldInfo::float("TOTAL_ASSETS_TDAYS", "-"),
            FieldInfo::float("ROE_AVG", "-"),
            FieldInfo::float("ROA", "-"),
            FieldInfo::float("CURRENT_RATIO", "-"),
            FieldInfo::float("SPEED_RATIO", "-"),
            FieldInfo::float("OCF_LIQDEBT", "-"),
            FieldInfo::float("DEBT_ASSET_RATIO", "-"),
            FieldInfo::float("EQUITY_RATIO", "-"),
            FieldInfo::float("BASIC_EPS_YOY", "-"),
            FieldInfo::float("GROSS_PROFIT_RATIO_YOY", "-"),
            FieldInfo::float("NET_PROFIT_RATIO_YOY", "-"),
            FieldInfo::float("ROE_AVG_YOY", "-"),
            FieldInfo::float("ROA_YOY", "-"),
            FieldInfo::float("DEBT_ASSET_RATIO_YOY", "-"),
            FieldInfo::float("CURRENT_RATIO_YOY", "-"),
            FieldInfo::float("SPEED_RATIO_YOY", "-"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[
            ("symbol", "symbol"),
            ("code", "symbol"),
            ("stock_code", "symbol"),
            ("indicator", "indicator"),
        ],
        default_params: &[("indicator", "年报")],
        required_params: &["symbol", "indicator"],
        add_param_columns: &[("indicator", "指标")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "stock_fund_flow_industry",
        display_name: "行业资金流",
        domain: Domain::Stocks,
        akshare_func: "stock_fund_flow_industry",
        kind: ProviderKind::Mapped,
        unique_keys: &["排行周期", "行业"],
        field_info: &[
            FieldInfo::string("排行周期", "即时/3日排行/5日排行/10日排行/20日排行"),
            FieldInfo::string("行业", "-"),
            FieldInfo::float("行业指数", "-"),
            FieldInfo::string("行业-涨跌幅", "注意单位: %"),
            FieldInfo::float("流入资金", "注意单位: 亿"),
            FieldInfo::float("流出资金", "注意单位: 亿"),
            FieldInfo::float("净额", "注意单位: 亿"),
            FieldInfo::float("公司家数", "-"),
            FieldInfo::string("领涨股", "-"),
            FieldInfo::string("领涨股-涨跌幅", "注意单位: %"),
            FieldInfo::float("当前价", "-"),
            FieldInfo::string("阶段涨跌幅", "注意单位: %"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[("symbol", "symbol"), ("period", "symbol")],
        default_params: &[("symbol", "即时")],
        required_params: &["symbol"],
        add_param_columns: &[("symbol", "排行周期")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "stock_history_dividend_detail",
        display_name: "分红配股",
        domain: Domain::Stocks,
        akshare_func: "stock_history_dividend_detail",
        kind: ProviderKind::Mapped,
        unique_keys: &["代码", "指标", "公告日期"],
        field_info: &[
            FieldInfo::string("代码", "股票代码"),
            FieldInfo::string("指标", "分红/配股"),
            FieldInfo::string("公告日期", "-"),
            FieldInfo::int("送股", "注意单位: 股"),
            FieldInfo::int("转增", "注意单位: 股"),
            FieldInfo::float("派息", "注意单位: 元"),
            FieldInfo::string("进度", "-"),
            FieldInfo::string("除权除息日", "-"),
            FieldInfo::string("股权登记日", "-"),
            FieldInfo::string("红股上市日", "-"),
            FieldInfo::float("配股方案", "注意单位: 每10股配股股数"),
            FieldInfo::float("配股价格", "注意单位: 元"),
            FieldInfo::int("基准股本", "注意单位: 股"),
            FieldInfo::string("除权日", "-"),
            FieldInfo::string("缴款起始日", "-"),
            FieldInfo::string("缴款终止日", "-"),
            FieldInfo::string("配股上市日", "-"),
            FieldInfo::float("募集资金合计", "注意单位: 元"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[
            ("symbol", "symbol"),
            ("code", "symbol"),
            ("stock_code", "symbol"),
            ("indicator", "indicator"),
            ("date", "date"),
        ],
        default_params: &[("indicator", "分红")],
        required_params: &["symbol", "indicator"],
        add_param_columns: &[("symbol", "代码"), ("indicator", "指标")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "stock_hk_financial_indicator_em",
        display_name: "港股财务指标-东财",
        domain: Domain::Stocks,
        akshare_func: "stock_hk_financial_indicator_em",
        kind: ProviderKind::Mapped,
        unique_keys: &["代码"],
        field_info: &[
            FieldInfo::string("代码", "港股代码"),
            FieldInfo::string("基本每股收益(元)", "-"),
            FieldInfo::string("每股净资产(元)", "-"),
            FieldInfo::string("法定股本(股)", "-"),
            FieldInfo::string("每手股", "-"),
            FieldInfo::string("每股股息TTM(港元)", "-"),
            FieldInfo::string("派息比率(%)", "-"),
            FieldInfo::string("已发行股本(股)", "-"),
            FieldInfo::int("已发行股本-H股(股)", "-"),
            FieldInfo::string("每股经营现金流(元)", "-"),
            FieldInfo::string("股息率TTM(%)", "-"),
            FieldInfo::string("总市值(港元)", "-"),
            FieldInfo::string("港股市值(港元)", "-"),
            FieldInfo::string("营业总收入", "-"),
            FieldInfo::string("营业总收入滚动环比增长(%)", "-"),
            FieldInfo::string("销售净利率(%)", "-"),
            FieldInfo::string("净利润", "-"),
            FieldInfo::string("净利润滚动环比增长(%)", "-"),
            FieldInfo::string("股东权益回报率(%)", "-"),
            FieldInfo::string("市盈率", "-"),
            FieldInfo::string("市净率", "-"),
            FieldInfo::string("总资产回报率(%)", "-"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[("symbol", "symbol"), ("code", "symbol"), ("stock_code", "symbol")],
        required_params: &["symbol"],
        add_param_columns: &[("symbol", "代码")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "stock_hk_hist_min_em",
        display_name: "港股分时数据-东财",
        domain: Domain::Stocks,
        akshare_func: "stock_hk_hist_min_em",
        kind: ProviderKind::Mapped,
        unique_keys: &["代码", "周期", "时间"],
        field_info: &[
            FieldInfo::string("代码", "港股代码"),
            FieldInfo::string("周期", "分钟周期"),
            FieldInfo::string("时间", "-"),
            FieldInfo::float("开盘", "注意单位: 港元"),
            FieldInfo::float("收盘", "注意单位: 港元"),
            FieldInfo::float("最高", "注意单位: 港元"),
            FieldInfo::float("最低", "注意单位: 港元"),
            FieldInfo::float("成交量", "注意单位: 股"),
            FieldInfo::float("成交额", "注意单位: 港元"),
            FieldInfo::float("最新价", "注意单位: 港元"),
            FieldInfo::float("涨跌幅", "注意单位: %"),
            FieldInfo::float("涨跌额", "注意单位: 港元"),
            FieldInfo::float("振幅", "注意单位: %"),
            FieldInfo::float("换手率", "注意单位: %"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[
            ("symbol", "symbol"),
            ("code", "symbol"),
            ("stock_code", "symbol"),
            ("period", "period"),
            ("adjust", "adjust"),
            ("start_date", "start_date"),
            ("end_date", "end_date"),
        ],
        required_params: &["symbol", "period"],
        add_param_columns: &[("symbol", "代码"), ("period", "周期")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "stock_hsgt_individual_em",
        display_name: "沪深港通持股-个股",
        domain: Domain::Stocks,
        akshare_func: "stock_hsgt_individual_em",
        kind: ProviderKind::Mapped,
        unique_keys: &["代码", "持股日期"],
        field_info: &[
            FieldInfo::string("代码", "股票代码"),
            FieldInfo::string("持股日期", "-"),
            FieldInfo::float("当日收盘价", "注意单位: 元"),
            FieldInfo::float("当日涨跌幅", "注意单位: %"),
            FieldInfo::int("持股数量", "注意单位: 股"),
            FieldInfo::float("持股市值", "注意单位: 元"),
            FieldInfo::float("持股数量占A股百分比", "注意单位: %"),
            FieldInfo::float("今日增持股数", "注意单位: 股"),
            FieldInfo::float("今日增持资金", "注意单位: 元"),
            FieldInfo::float("今日持股市值变化", "注意单位: 元"),
            FieldInfo::float("持股市值变化-1日", "注意单位: 港元"),
            FieldInfo::float("持股市值变化-5日", "注意单位: 港元"),
            FieldInfo::float("持股市值变化-10日", "注意单位: 港元"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[("symbol", "symbol"), ("code", "symbol"), ("stock_code", "symbol")],
        required_params: &["symbol"],
        add_param_columns: &[("symbol", "代码")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "stock_lhb_detail_em",
        display_name: "龙虎榜详情",
        domain: Domain::Stocks,
        akshare_func: "stock_lhb_detail_em",
        kind: ProviderKind::Mapped,
        unique_keys: &["代码", "上榜日", "上榜原因"],
        field_info: &[
            FieldInfo::string("代码", "-"),
            FieldInfo::string("上榜日", "-"),
            FieldInfo::string("解读", "-"),
            FieldInfo::float("收盘价", "-"),
            FieldInfo::float("涨跌幅", "注意单位: %"),
            FieldInfo::float("龙虎榜净买额", "注意单位: 元"),
            FieldInfo::float("龙虎榜买入额", "注意单位: 元"),
            FieldInfo::float("龙虎榜卖出额", "注意单位: 元"),
            FieldInfo::float("龙虎榜成交额", "注意单位: 元"),
            FieldInfo::int("市场总成交额", "注意单位: 元"),
            FieldInfo::float("净买额占总成交比", "注意单位: %"),
            FieldInfo::float("成交额占总成交比", "注意单位: %"),
            FieldInfo::float("换手率", "注意单位: %"),
            FieldInfo::float("流通市值", "注意单位: 元"),
            FieldInfo::string("上榜原因", "-"),
            FieldInfo::float("上榜后1日", "注意单位: %"),
            FieldInfo::float("上榜后2日", "注意单位: %"),
            FieldInfo::float("上榜后5日", "注意单位: %"),
            FieldInfo::float("上榜后10日", "注意单位: %"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[("start_date", "start_date"), ("end_date", "end_date")],
        required_params: &["start_date", "end_date"],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "stock_lhb_stock_statistic_em",
        display_name: "个股上榜统计",
        domain: Domain::Stocks,
        akshare_func: "stock_lhb_stock_statistic_em",
        kind: ProviderKind::Mapped,
        unique_keys: &["统计周期", "代码"],
        field_info: &[
            FieldInfo::string("统计周期", "近一月/近三月/近六月/近一年"),
            FieldInfo::string("代码", "-"),
            FieldInfo::string("最近上榜日", "-"),
            FieldInfo::float("收盘价", "-"),
            FieldInfo::float("涨跌幅", "-"),
            FieldInfo::int("上榜次数", "-"),
            FieldInfo::float("龙虎榜净买额", "-"),
            FieldInfo::float("龙虎榜买入额", "-"),
            FieldInfo::float("龙虎榜卖出额", "-"),
            FieldInfo::float("龙虎榜总成交额", "-"),
            FieldInfo::int("买方机构次数", "-"),
            FieldInfo::int("卖方机构次数", "-"),
            FieldInfo::float("机构买入净额", "-"),
            FieldInfo::float("机构买入总额", "-"),
            FieldInfo::float("机构卖出总额", "-"),
            FieldInfo::float("近1个月涨跌幅", "-"),
            FieldInfo::float("近3个月涨跌幅", "-"),
            FieldInfo::float("近6个月涨跌幅", "-"),
            FieldInfo::float("近1年涨跌幅", "-"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[("symbol", "symbol"), ("period", "symbol")],
        default_params: &[("symbol", "近一月")],
        required_params: &["symbol"],
        add_param_columns: &[("symbol", "统计周期")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "stock_profile_cninfo",
        display_name: "公司概况-巨潮资讯",
        domain: Domain::Stocks,
        akshare_func: "stock_profile_cninfo",
        kind: ProviderKind::Mapped,
        unique_keys: &["代码"],
        field_info: &[
            FieldInfo::string("代码", "股票代码"),
            FieldInfo::string("曾用简称", "-"),
            FieldInfo::string("A股代码", "-"),
            FieldInfo::string("A股简称", "-"),
            FieldInfo::string("B股代码", "-"),
            FieldInfo::string("B股简称", "-"),
            FieldInfo::string("H股代码", "-"),
            FieldInfo::string("H股简称", "-"),
            FieldInfo::string("入选指数", "-"),
            FieldInfo::string("所属市场", "-"),
            FieldInfo::string("所属行业", "-"),
            FieldInfo::string("法人代表", "-"),
            FieldInfo::string("注册资金", "-"),
            FieldInfo::string("成立日期", "-"),
            FieldInfo::string("上市日期", "-"),
            FieldInfo::string("官方网站", "-"),
            FieldInfo::string("电子邮箱", "-"),
            FieldInfo::string("联系电话", "-"),
            FieldInfo::string("传真", "-"),
            FieldInfo::string("注册地址", "-"),
            FieldInfo::string("办公地址", "-"),
            FieldInfo::string("邮政编码", "-"),
            FieldInfo::string("主营业务", "-"),
            FieldInfo::string("经营范围", "-"),
            FieldInfo::string("机构简介", "-"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[("symbol", "symbol"), ("code", "symbol"), ("stock_code", "symbol")],
        required_params: &["symbol"],
        add_param_columns: &[("symbol", "代码")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    // 按年度汇总的预测表，机构明细表没有年度列
    CollectionSpec {
        name: "stock_profit_forecast_ths",
        display_name: "盈利预测-同花顺",
        domain: Domain::Stocks,
        akshare_func: "stock_profit_forecast_ths",
        kind: ProviderKind::Mapped,
        unique_keys: &["代码", "指标", "年度"],
        field_info: &[
            FieldInfo::string("代码", "股票代码"),
            FieldInfo::string("指标", "预测年报每股收益/预测年报净利润等"),
            FieldInfo::string("年度", "-"),
            FieldInfo::int("预测机构数", "-"),
            FieldInfo::float("最小值", "-"),
            FieldInfo::float("均值", "-"),
            FieldInfo::float("最大值", "-"),
            FieldInfo::float("行业平均数", "-"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[
            ("symbol", "symbol"),
            ("code", "symbol"),
            ("stock_code", "symbol"),
            ("indicator", "indicator"),
        ],
        default_params: &[("indicator", "预测年报每股收益")],
        required_params: &["symbol", "indicator"],
        add_param_columns: &[("symbol", "代码"), ("indicator", "指标")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "stock_sector_detail",
        display_name: "板块详情",
        domain: Domain::Stocks,
        akshare_func: "stock_sector_detail",
        kind: ProviderKind::Mapped,
        unique_keys: &["板块", "code"],
        field_info: &[
            FieldInfo::string("板块", "板块代码，如hangye_ZL01"),
            FieldInfo::string("symbol", "-"),
            FieldInfo::string("code", "-"),
            FieldInfo::string("name", "-"),
            FieldInfo::float("trade", "-"),
            FieldInfo::float("pricechange", "-"),
            FieldInfo::float("changepercent", "-"),
            FieldInfo::float("buy", "-"),
            FieldInfo::float("sell", "-"),
            FieldInfo::float("settlement", "-"),
            FieldInfo::float("open", "-"),
            FieldInfo::float("high", "-"),
            FieldInfo::float("low", "-"),
            FieldInfo::int("volume", "-"),
            FieldInfo::int("amount", "-"),
            FieldInfo::string("ticktime", "-"),
            FieldInfo::float("per", "-"),
            FieldInfo::float("pb", "-"),
            FieldInfo::float("mktcap", "-"),
            FieldInfo::float("nmc", "-"),
            FieldInfo::float("turnoverratio", "-"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[("sector", "sector"), ("symbol", "sector")],
        required_params: &["sector"],
        add_param_columns: &[("sector", "板块")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "stock_share_change_cninfo",
        display_name: "公司股本变动-巨潮资讯",
        domain: Domain::Stocks,
        akshare_func: "stock_share_change_cninfo",
        kind: ProviderKind::Mapped,
        unique_keys: &["证券代码", "变动日期", "公告日期"],
        field_info: &[
            FieldInfo::string("证券简称", "-"),
            FieldInfo::float("境外法人持股", "-"),
            FieldInfo::float("证券投资基金持股", "-"),
            FieldInfo::float("国家持股-受限", "-"),
            FieldInfo::float("国有法人持股", "-"),
            FieldInfo::float("配售法人股", "-"),
            FieldInfo::float("发起人股份", "-"),
            FieldInfo::float("未流通股份", "-"),
            FieldInfo::float("其中：境外自然人持股", "-"),
            FieldInfo::float("其他流通受限股份", "-"),
            FieldInfo::float("其他流通股", "-"),
            FieldInfo::float("外资持股-受限", "-"),
            FieldInfo::float("内部职工股", "-"),
            FieldInfo::float("境外上市外资股-H股", "-"),
            FieldInfo::float("其中：境内法人持股", "-"),
            FieldInfo::float("自然人持股", "-"),
            FieldInfo::float("人民币普通股", "-"),
            FieldInfo::float("国有法人持股-受限", "-"),
            FieldInfo::float("一般法人持股", "-"),
            FieldInfo::float("控股股东、实际控制人", "-"),
            FieldInfo::float("其中：限售H股", "-"),
            FieldInfo::string("变动原因", "-"),
            FieldInfo::string("公告日期", "-"),
            FieldInfo::float("境内法人持股", "-"),
            FieldInfo::string("证券代码", "-"),
            FieldInfo::string("变动日期", "-"),
            FieldInfo::float("战略投资者持股", "-"),
            FieldInfo::float("国家持股", "-"),
            FieldInfo::float("其中：限售B股", "-"),
            FieldInfo::float("其他未流通股", "-"),
            FieldInfo::float("流通受限股份", "-"),
            FieldInfo::float("优先股", "-"),
            FieldInfo::float("高管股", "-"),
            FieldInfo::float("总股本", "-"),
            FieldInfo::float("其中：限售高管股", "-"),
            FieldInfo::float("转配股", "-"),
            FieldInfo::float("境内上市外资股-B股", "-"),
            FieldInfo::float("其中：境外法人持股", "-"),
            FieldInfo::float("募集法人股", "-"),
            FieldInfo::float("已流通股份", "-"),
            FieldInfo::float("其中：境内自然人持股", "-"),
            FieldInfo::float("其他内资持股-受限", "-"),
            FieldInfo::string("变动原因编码", "-"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[
            ("symbol", "symbol"),
            ("code", "symbol"),
            ("stock_code", "symbol"),
            ("start_date", "start_date"),
            ("end_date", "end_date"),
        ],
        required_params: &["symbol", "start_date", "end_date"],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    // 北交所返回 代码/简称，统一成 股票代码/股票简称
    CollectionSpec {
        name: "stock_xgsglb_em",
        display_name: "新股申购与中签",
        domain: Domain::Stocks,
        akshare_func: "stock_xgsglb_em",
        kind: ProviderKind::Mapped,
        unique_keys: &["股票代码"],
        field_info: &[
            FieldInfo::string("股票代码", "-"),
            FieldInfo::string("股票简称", "-"),
            FieldInfo::string("交易所", "-"),
            FieldInfo::string("板块", "-"),
            FieldInfo::string("申购代码", "-"),
            FieldInfo::float("发行总数", "注意单位: 股"),
            FieldInfo::int("网上发行", "注意单位: 股"),
            FieldInfo::float("顶格申购需配市值", "注意单位: 股"),
            FieldInfo::int("申购上限", "-"),
            FieldInfo::float("发行价格", "-"),
            FieldInfo::float("最新价", "-"),
            FieldInfo::float("首日收盘价", "-"),
            FieldInfo::string("申购日期", "-"),
            FieldInfo::string("中签号公布日", "-"),
            FieldInfo::string("中签缴款日期", "-"),
            FieldInfo::string("上市日期", "-"),
            FieldInfo::float("发行市盈率", "-"),
            FieldInfo::float("行业市盈率", "-"),
            FieldInfo::float("中签率", "注意单位: %"),
            FieldInfo::float("询价累计报价倍数", "-"),
            FieldInfo::float("配售对象报价家数", "-"),
            FieldInfo::string("连续一字板数量", "-"),
            FieldInfo::float("涨幅", "注意单位: %"),
            FieldInfo::float("每中一签获利", "注意单位: 元"),
            FieldInfo::int("网上-发行数量", "注意单位: 股"),
            FieldInfo::int("网上-申购上限", "注意单位: 股"),
            FieldInfo::int("网上-顶格所需资金", "注意单位: 元"),
            FieldInfo::string("申购日", "-"),
            FieldInfo::float("稳获百股需配资金", "-"),
            FieldInfo::float("最新价格-价格", "-"),
            FieldInfo::float("最新价格-累计涨幅", "-"),
            FieldInfo::string("上市首日-上市日", "-"),
            FieldInfo::float("上市首日-均价", "-"),
            FieldInfo::float("上市首日-涨幅", "-"),
            FieldInfo::float("上市首日-每百股获利", "-"),
            FieldInfo::float("上市首日-约合年化收益", "-"),
            FieldInfo::float("参与申购资金", "-"),
            FieldInfo::float("参与申购人数", "-"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[("symbol", "symbol"), ("market", "symbol")],
        default_params: &[("symbol", "全部股票")],
        required_params: &["symbol"],
        column_renames: &[("代码", "股票代码"), ("简称", "股票简称")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    // 同行比较，结果含行业平均和中值行
    CollectionSpec {
        name: "stock_zh_dupont_comparison_em",
        display_name: "杜邦分析比较",
        domain: Domain::Stocks,
        akshare_func: "stock_zh_dupont_comparison_em",
        kind: ProviderKind::Mapped,
        unique_keys: &["查询代码", "代码", "简称"],
        field_info: &[
            FieldInfo::string("查询代码", "查询的股票代码"),
            FieldInfo::string("代码", "-"),
            FieldInfo::string("简称", "-"),
            FieldInfo::float("ROE-3年平均", "-"),
            FieldInfo::float("ROE-22A", "-"),
            FieldInfo::float("ROE-23A", "-"),
            FieldInfo::float("ROE-24A", "-"),
            FieldInfo::float("净利率-3年平均", "-"),
            FieldInfo::float("净利率-22A", "-"),
            FieldInfo::float("净利率-23A", "-"),
            FieldInfo::float("净利率-24A", "-"),
            FieldInfo::float("总资产周转率-3年平均", "-"),
            FieldInfo::float("总资产周转率-22A", "-"),
            FieldInfo::float("总资产周转率-23A", "-"),
            FieldInfo::float("总资产周转率-24A", "-"),
            FieldInfo::float("权益乘数-3年平均", "-"),
            FieldInfo::float("权益乘数-22A", "-"),
            FieldInfo::float("权益乘数-23A", "-"),
            FieldInfo::float("权益乘数-24A", "-"),
            FieldInfo::float("ROE-3年平均排名", "-"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[("symbol", "symbol"), ("code", "symbol"), ("stock_code", "symbol")],
        required_params: &["symbol"],
        add_param_columns: &[("symbol", "查询代码")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "stock_zh_growth_comparison_em",
        display_name: "成长性比较",
        domain: Domain::Stocks,
        akshare_func: "stock_zh_growth_comparison_em",
        kind: ProviderKind::Mapped,
        unique_keys: &["查询代码", "代码", "简称"],
        field_info: &[
            FieldInfo::string("查询代码", "查询的股票代码"),
            FieldInfo::string("代码", "-"),
            FieldInfo::string("简称", "-"),
            FieldInfo::float("基本每股收益增长率-3年复合", "-"),
            FieldInfo::float("基本每股收益增长率-24A", "-"),
            FieldInfo::float("基本每股收益增长率-TTM", "-"),
            FieldInfo::float("基本每股收益增长率-25E", "-"),
            FieldInfo::float("基本每股收益增长率-26E", "-"),
            FieldInfo::float("基本每股收益增长率-27E", "-"),
            FieldInfo::float("营业收入增长率-3年复合", "-"),
            FieldInfo::float("营业收入增长率-24A", "-"),
            FieldInfo::float("营业收入增长率-TTM", "-"),
            FieldInfo::float("营业收入增长率-25E", "-"),
            FieldInfo::float("营业收入增长率-26E", "-"),
            FieldInfo::float("营业收入增长率-27E", "-"),
            FieldInfo::float("净利润增长率-3年复合", "-"),
            FieldInfo::float("净利润增长率-24A", "-"),
            FieldInfo::float("净利润增长率-TTM", "-"),
            FieldInfo::float("净利润增长率-25E", "-"),
            FieldInfo::float("净利润增长率-26E", "-"),
            FieldInfo::float("净利润增长率-27E", "-"),
            FieldInfo::float("基本每股收益增长率-3年复合排名", "-"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[("symbol", "symbol"), ("code", "symbol"), ("stock_code", "symbol")],
        required_params: &["symbol"],
        add_param_columns: &[("symbol", "查询代码")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
    CollectionSpec {
        name: "stock_zh_valuation_comparison_em",
        display_name: "估值比较",
        domain: Domain::Stocks,
        akshare_func: "stock_zh_valuation_comparison_em",
        kind: ProviderKind::Mapped,
        unique_keys: &["查询代码", "代码", "简称"],
        field_info: &[
            FieldInfo::string("查询代码", "查询的股票代码"),
            FieldInfo::string("代码", "-"),
            FieldInfo::string("简称", "-"),
            FieldInfo::float("PEG", "-"),
            FieldInfo::float("市盈率-24A", "-"),
            FieldInfo::float("市盈率-TTM", "-"),
            FieldInfo::float("市盈率-25E", "-"),
            FieldInfo::float("市盈率-26E", "-"),
            FieldInfo::float("市盈率-27E", "-"),
            FieldInfo::float("市销率-24A", "-"),
            FieldInfo::float("市销率-TTM", "-"),
            FieldInfo::float("市销率-25E", "-"),
            FieldInfo::float("市销率-26E", "-"),
            FieldInfo::float("市销率-27E", "-"),
            FieldInfo::float("市净率-24A", "-"),
            FieldInfo::float("市净率-MRQ", "-"),
            FieldInfo::float("市现率PCE-24A", "-"),
            FieldInfo::float("市现率PCE-TTM", "-"),
            FieldInfo::float("市现率PCF-24A", "-"),
            FieldInfo::float("市现率PCF-TTM", "-"),
            FieldInfo::float("EV/EBITDA-24A", "-"),
            FieldInfo::float("PEG排名", "-"),
            FieldInfo::datetime("更新时间", "数据更新时间"),
        ],
        param_mapping: &[("symbol", "symbol"), ("code", "symbol"), ("stock_code", "symbol")],
        required_params: &["symbol"],
        add_param_columns: &[("symbol", "查询代码")],
        timestamp_field: UPDATED_AT_FIELD,
        ..CollectionSpec::EMPTY
    },
];
