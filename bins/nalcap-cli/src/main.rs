//! nalcap-cli - 抓包十六进制文本转 H.264 裸码流工具
//!
//! 读取 tshark 等工具导出的十六进制文本 (每行一个报文), 提取其中的
//! SPS/PPS/I 帧/P 帧 NAL 数据, 拼接为可直接播放的 .h264 文件.

mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;

use nalcap_core::NalcapError;
use nalcap_extract::{ExtractConfig, RunReport, run_with_config};

#[derive(Parser, Debug)]
#[command(name = "nalcap-cli", version, about = "从抓包十六进制文本提取 H.264 裸码流")]
struct Cli {
    /// 输入文件路径 (默认: <基准目录>/tshark_output.txt)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// 输出文件路径 (默认: <基准目录>/output.h264)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 默认文件所在的基准目录 (默认: 可执行文件所在目录)
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// JSON 配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 每处理多少行输出一次进度, 0 表示关闭
    #[arg(long)]
    progress_interval: Option<u64>,

    /// 以 JSON 格式输出统计结果
    #[arg(long)]
    json: bool,

    /// 日志文件目录 (不指定则只输出到控制台)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// 日志级别 (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logging::init("nalcap-cli", cli.verbose, cli.log_dir.as_deref()) {
        eprintln!("警告: 日志初始化失败: {e:#}");
    }

    if let Err(e) = run(&cli) {
        match e.downcast_ref::<NalcapError>() {
            Some(NalcapError::MissingInput { path }) => {
                eprintln!("错误: 未找到输入文件 '{}'", path.display());
            }
            _ => eprintln!("错误: {e:#}"),
        }
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("获取当前目录失败")?;
    let config = build_config(cli, &cwd)?;
    let base_dir = match &cli.base_dir {
        Some(dir) => absolutize(&cwd, dir),
        None => default_base_dir(&cwd),
    };

    if !cli.json {
        println!("基准目录: {}", base_dir.display());
        println!("输入文件: {}", config.input_path(&base_dir).display());
    }

    let report = run_with_config(&config, &base_dir)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("序列化统计结果失败")?;
        println!("{json}");
    } else {
        print_summary(&report);
    }
    Ok(())
}

/// 合并配置文件与命令行参数, 命令行给出的相对路径相对于当前目录
fn build_config(cli: &Cli, cwd: &Path) -> Result<ExtractConfig> {
    let mut config = match &cli.config {
        Some(path) => ExtractConfig::from_json_file(&absolutize(cwd, path))?,
        None => ExtractConfig::default(),
    };
    if let Some(input) = &cli.input {
        config.input_file = absolutize(cwd, input);
    }
    if let Some(output) = &cli.output {
        config.output_file = absolutize(cwd, output);
    }
    if let Some(interval) = cli.progress_interval {
        config.progress_interval = interval;
    }
    Ok(config)
}

fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// 可执行文件所在目录, 无法获取时退回当前目录
fn default_base_dir(cwd: &Path) -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| cwd.to_path_buf())
}

fn print_summary(report: &RunReport) {
    let stats = &report.stats;
    println!();
    println!("--- 处理完成 ---");
    println!("已生成文件: '{}'", report.output.display());
    println!("处理行数: {}", stats.lines_processed);
    println!("输出大小: {} 字节", stats.bytes_written);
    println!(
        "跳过报文 (预筛/无标记/解码错误): {} ({}/{}/{})",
        stats.packets_skipped, stats.filtered_by_offset, stats.no_marker, stats.decode_errors
    );
    println!(
        "NAL 数据块: {} (SPS {}, PPS {}, I 帧 {}, P 帧 {})",
        stats.blocks.total(),
        stats.blocks.sps,
        stats.blocks.pps,
        stats.blocks.i_frame,
        stats.blocks.p_frame
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("nalcap-cli").chain(args.iter().copied()))
            .expect("参数解析失败")
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let dir = tempfile::tempdir().expect("创建临时目录失败");
        let config_path = dir.path().join("nalcap.json");
        std::fs::write(
            &config_path,
            r#"{"input_file": "cap.txt", "progress_interval": 500}"#,
        )
        .expect("写入配置失败");

        let cli = parse(&[
            "-c",
            config_path.to_str().expect("路径非 UTF-8"),
            "-o",
            "out.h264",
            "--progress-interval",
            "0",
        ]);
        let cwd = Path::new("/work");
        let config = build_config(&cli, cwd).expect("构建配置失败");

        // 配置文件中的相对路径留待按基准目录解析
        assert_eq!(config.input_file, PathBuf::from("cap.txt"));
        assert_eq!(config.output_file, PathBuf::from("/work/out.h264"));
        assert_eq!(config.progress_interval, 0);
    }

    #[test]
    fn test_defaults_without_arguments() {
        let cli = parse(&[]);
        let config = build_config(&cli, Path::new("/work")).expect("构建配置失败");
        assert_eq!(config, ExtractConfig::default());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.json);
        // 未指定 --log-dir 时不写日志文件
        assert!(cli.log_dir.is_none());
    }

    #[test]
    fn test_log_dir_enables_file_logging() {
        let cli = parse(&["--log-dir", "logs"]);
        assert_eq!(cli.log_dir, Some(PathBuf::from("logs")));
    }

    #[test]
    fn test_verbose_count() {
        assert_eq!(parse(&["-vv"]).verbose, 2);
    }

    #[test]
    fn test_default_base_dir_is_absolute() {
        let cwd = std::env::current_dir().expect("获取当前目录失败");
        assert!(default_base_dir(&cwd).is_absolute());
    }
}
