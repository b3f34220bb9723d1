//! 터미널 출력 포맷팅 유틸리티
//!
//! CLI 화면에서 프로필, 상품 분석 결과, 안내 문구를 박스/트리 형태로 출력합니다.
//! `render_*` 함수는 문자열을 만들고 `print_*` 함수는 그것을 출력합니다.

use crate::domain::{Profile, ProductInfo};

/// 박스 형태로 둘러싸인 제목을 만듭니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                    마이페이지                    ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn render_boxed_title(title: &str) -> String {
    let content_width = 50;
    let border = "═".repeat(content_width);

    format!("╔{}╗\n║{:^50}║\n╚{}╝", border, title, border)
}

/// 박스 형태로 둘러싸인 제목을 출력합니다
pub fn print_boxed_title(title: &str) {
    println!("{}", render_boxed_title(title));
}

/// 들여쓰기된 항목 한 줄을 만듭니다
///
/// 값이 비어 있으면 `-`로 표시합니다.
pub fn render_field(name: &str, value: &str) -> String {
    let value = if value.is_empty() { "-" } else { value };
    format!("   ├─ {}: {}", name, value)
}

/// 프로필 화면을 만듭니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                    마이페이지                    ║
/// ╚══════════════════════════════════════════════════╝
///    ├─ 닉네임: Kim
///    ├─ 이메일: x@y.com
///    ├─ 기본 배송지: Seoul
///    ├─ 프로필 사진: -
/// ```
pub fn render_profile(profile: &Profile) -> String {
    // data URI는 길어서 종류만 표시
    let image = if profile.profile_image.starts_with("data:") {
        "(업로드된 이미지)"
    } else {
        profile.profile_image.as_str()
    };

    [
        render_boxed_title("마이페이지"),
        render_field("닉네임", &profile.nickname),
        render_field("이메일", &profile.email),
        render_field("기본 배송지", &profile.address),
        render_field("프로필 사진", image),
    ]
    .join("\n")
}

/// 프로필 화면을 출력합니다
pub fn print_profile(profile: &Profile) {
    println!("{}", render_profile(profile));
}

/// 상품 분석 결과를 만듭니다
pub fn render_product(product: &ProductInfo) -> String {
    [
        render_boxed_title("구매 요청"),
        render_field("상품명", &product.title),
        render_field("가격", &product.formatted_price()),
        render_field("이미지", &product.image),
        render_field("원본 링크", &product.url),
        render_field("설명", &product.desc),
    ]
    .join("\n")
}

/// 상품 분석 결과를 출력합니다
pub fn print_product(product: &ProductInfo) {
    println!("{}", render_product(product));
}

/// 사용자 안내/에러 문구를 출력합니다
pub fn print_notice(message: &str) {
    println!("⚠️  {}", message);
}
