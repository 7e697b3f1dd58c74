use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// 目标地址
    #[arg(short, long)]
    pub url: String,

    /// 请求方法
    #[arg(short, long, default_value = "GET")]
    pub method: String,

    /// 请求体，原样发送
    #[arg(short, long)]
    pub body: Option<String>,

    /// 超时时间（秒）
    #[arg(short, long, default_value_t = 2)]
    pub timeout: u64,

    /// 提取字段，格式为 selector=metric_name，可重复
    #[arg(short, long = "field")]
    pub fields: Vec<String>,

    /// 请求头，格式为 "Name: value"，可重复
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,

    /// 打印详情
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args = Args::parse_from([
            "metric-converter",
            "--url",
            "http://localhost:8545",
            "-m",
            "post",
            "-f",
            "result=eth_block_number",
            "-f",
            "id",
            "-H",
            "Content-Type: application/json",
        ]);
        assert_eq!(args.method, "post");
        assert_eq!(args.timeout, 2);
        assert_eq!(args.fields, vec!["result=eth_block_number", "id"]);
        assert_eq!(args.headers, vec!["Content-Type: application/json"]);
        assert!(args.body.is_none());
        assert!(!args.verbose);
    }
}
