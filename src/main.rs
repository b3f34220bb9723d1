//! 직구메이트 클라이언트 CLI
//!
//! 스토어프론트의 로그인, 마이페이지, 구매 요청, 로그아웃 흐름을 터미널에서 실행합니다.
//!
//! # Usage
//!
//! ```bash
//! # 로그인 (자격 증명 저장 후 마이페이지로 이동)
//! jikgumate login -u kim@example.com -p secret
//!
//! # 마이페이지 (세션 확인 + 프로필 조회)
//! jikgumate mypage
//! jikgumate mypage --nickname Lee --address Busan --image ./avatar.png
//!
//! # 구매 요청 (상품 링크 분석)
//! jikgumate analyze "https://www.amazon.com/dp/B0EXAMPLE"
//!
//! # 로그아웃
//! jikgumate logout
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{error, info};
use jikgumate_client::config::{load_env_file, ApiConfig, Environment, SessionPolicy, StorageConfig};
use jikgumate_client::errors::AppResult;
use jikgumate_client::http::ReqwestTransport;
use jikgumate_client::navigation::{LogNavigator, PageScope, TerminalNotifier};
use jikgumate_client::services::{
    ApiClient, AuthService, LogoutSequencer, ProductService, ProfileDraft, SessionContext,
    SessionGuard,
};
use jikgumate_client::stores::open_store;
use jikgumate_client::utils::display_terminal::{print_notice, print_product, print_profile};

#[derive(Parser)]
#[command(name = "jikgumate")]
#[command(author, version, about = "직구메이트 스토어프론트 클라이언트")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 로그인하고 자격 증명을 저장합니다
    Login {
        /// 아이디 (이메일)
        #[arg(short, long)]
        username: String,

        /// 비밀번호
        #[arg(short, long)]
        password: String,
    },
    /// 세션을 확인하고 프로필을 보여줍니다
    Mypage {
        /// 새 닉네임
        #[arg(long)]
        nickname: Option<String>,

        /// 새 기본 배송지
        #[arg(long)]
        address: Option<String>,

        /// 새 프로필 사진 파일
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// 해외 상품 링크를 분석합니다
    Analyze {
        /// 상품 링크
        link: String,
    },
    /// 로그아웃합니다
    Logout,
}

#[tokio::main]
async fn main() -> ExitCode {
    load_env_file();
    let environment = Environment::current();
    init_logging(&environment);
    info!("실행 환경: {:?}", environment);

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("명령 실패: {}", e);
            print_notice(&e.user_message());
            ExitCode::FAILURE
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: 개발 환경 "debug", 그 외 "info")
///
/// ```bash
/// RUST_LOG=jikgumate_client=debug jikgumate mypage
/// ```
fn init_logging(environment: &Environment) {
    env_logger::init_from_env(Env::default().default_filter_or(environment.default_log_filter()));
}

/// 설정을 읽어 서비스 공용 협력 객체를 구성합니다
async fn build_context() -> AppResult<SessionContext> {
    let storage = StorageConfig::from_env();
    let api = ApiConfig::from_env();

    let store = open_store(&storage).await?;
    let client = ApiClient::new(&api, Arc::new(ReqwestTransport::new()))?;

    Ok(SessionContext {
        store,
        client: Arc::new(client),
        navigator: Arc::new(LogNavigator::new()),
        notifier: Arc::new(TerminalNotifier),
        policy: SessionPolicy::from_env(),
    })
}

async fn run(cli: Cli) -> AppResult<()> {
    let context = build_context().await?;

    match cli.command {
        Commands::Login { username, password } => {
            let credentials = AuthService::new(context).login(&username, &password).await?;
            info!("로그인 완료: {}", credentials.email().unwrap_or_default());
        }
        Commands::Mypage {
            nickname,
            address,
            image,
        } => {
            let mut guard = SessionGuard::new(context);
            guard.mount(&PageScope::new()).await;

            // 안내와 이동은 세션 가드가 이미 처리함
            if !guard.is_authenticated() {
                return Ok(());
            }

            let edited = nickname.is_some() || address.is_some() || image.is_some();
            if !edited {
                print_profile(guard.profile());
                return Ok(());
            }

            let mut draft = ProfileDraft::from_profile(guard.profile());
            if let Some(nickname) = nickname {
                draft.set_nickname(nickname);
            }
            if let Some(address) = address {
                draft.set_address(address);
            }
            if let Some(image) = image {
                draft.set_image_file(&image).await?;
            }
            print_profile(&draft.commit()?);
        }
        Commands::Analyze { link } => {
            let product = ProductService::new(context).analyze(&link, &PageScope::new()).await?;
            print_product(&product);
        }
        Commands::Logout => {
            LogoutSequencer::new(context).logout().await;
        }
    }

    Ok(())
}
