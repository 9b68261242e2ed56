use clap::Parser;
use termorch::ai::factory::ProviderFactory;

#[derive(Parser, Debug)]
#[command(name = "termorch")]
#[command(version)]
#[command(about = "Translate natural-language objectives into safety-annotated shell command plans", long_about = None)]
pub struct Cli {
    /// 자연어 objective (생략하면 대화형으로 입력)
    pub objective: Vec<String>,

    /// reasoning backend 선택 (anthropic, claude-cli). 미지정시 설정 파일의 provider 사용
    #[arg(short = 'p', long, value_parser = parse_provider)]
    pub provider: Option<String>,

    /// HTTP API 서버 실행
    #[arg(long, conflicts_with = "objective")]
    pub serve: bool,

    /// 서버 주소 (예: 127.0.0.1:3000)
    #[arg(long, requires = "serve")]
    pub bind: Option<String>,

    /// 계획을 JSON 그대로 출력
    #[arg(long)]
    pub json: bool,

    /// 디버그 로그 출력
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// 기본 설정 파일 생성 (~/.termorch/config.toml)
    #[arg(long)]
    pub init_config: bool,
}

/// 알 수 없는 provider는 설정을 읽기 전에 거부
fn parse_provider(name: &str) -> Result<String, String> {
    if ProviderFactory::is_supported(name) {
        Ok(name.to_string())
    } else {
        Err(format!(
            "Unknown provider: {} (supported: {})",
            name,
            ProviderFactory::supported_providers().join(", ")
        ))
    }
}

impl Cli {
    /// 인자로 받은 objective (없으면 None)
    pub fn objective_text(&self) -> Option<String> {
        if self.objective.is_empty() {
            None
        } else {
            Some(self.objective.join(" "))
        }
    }
}
