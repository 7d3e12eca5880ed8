// src/config/consts.rs

// Net config
pub const INDEX_URL: &str = "https://yjsy.gxtcmu.edu.cn/Category_70/Index.aspx";
pub const BASE_ORIGIN: &str = "https://yjsy.gxtcmu.edu.cn/";

// Fixed header block sent with every request, mimicking a desktop
// browser. accept-encoding is deliberately absent: reqwest fills it
// in from the enabled compression features and decompresses for us.
pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.9";
pub const ACCEPT_LANGUAGE: &str = "zh-CN,zh;q=0.9,en;q=0.8,en-GB;q=0.7,en-US;q=0.6";
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/109.0.0.0 Safari/537.36 Edg/109.0.1518.70";

// Export
pub const DEFAULT_OUT_FILE: &str = "gxtcmu-yjsy.csv";
pub const INFO_FILE_SUFFIX: &str = "-info";
