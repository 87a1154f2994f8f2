use std::path::Path;

use zhuyin_engine::{
    annotate, annotate_preserving_markup, AnnotationContext, Lang, ZhuyinDict,
};

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/self-parse.json".to_string());
    let dict = ZhuyinDict::load_or_empty(Path::new(&path));
    println!("=== Dictionary: {} entries ===", dict.len());

    let ctx = AnnotationContext::new(Lang::Zh, true, &dict);

    println!("\n=== Plain annotation ===");
    for text in &["台灣畫尪仔", "Taiwan台灣!", "早安你好", "第1頁，共3頁"] {
        println!("  {text}");
        println!("  -> {}", annotate(text, &ctx));
    }

    println!("\n=== Markup-preserving ===");
    let markup = r#"<p class="intro">歡迎來到<b>台灣</b>！</p>"#;
    println!("  {markup}");
    println!("  -> {}", annotate_preserving_markup(markup, &ctx));

    println!("\n=== Non-Chinese interface (annotation off) ===");
    let en = AnnotationContext::new(Lang::En, true, &dict);
    println!("  -> {}", annotate("台灣", &en));
}
