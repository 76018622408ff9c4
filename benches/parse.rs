// benches/parse.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use scraper::Html;

use notice_scrape::specs;

fn ntis_sample(rows: usize) -> String {
    let body: String = (0..rows)
        .map(|i| {
            format!(
                r#"<tr><td data-title="번호">{i}</td><td data-title="현황">접수중</td>
                   <td data-title="공고명"><a href="/view">공고 {i}</a></td>
                   <td data-title="마감일">2025-03-31</td></tr>"#
            )
        })
        .collect();
    format!(r#"<table class="basic_list"><tbody>{body}</tbody></table>"#)
}

fn smtech_sample(rows: usize) -> String {
    let body: String = (0..rows)
        .map(|i| {
            format!(
                r#"<tr><td>{i}</td><td>구분</td><td><a href="/v">공고 {i}</a></td>
                   <td>2024-01-01~2024-01-31</td><td>기관</td><td><img alt="접수중"></td></tr>"#
            )
        })
        .collect();
    format!(r#"<table class="tbl_base tbl_type01"><tbody>{body}</tbody></table>"#)
}

fn koita_sample(rows: usize) -> String {
    let body: String = (0..rows)
        .map(|i| format!(r#"<tr><td><a href="javascript:page_move({{no: {i}}});">공고</a></td></tr>"#))
        .collect();
    format!(r#"<table class="tb tb_col tb_bd tb_st01"><tbody>{body}</tbody></table>"#)
}

fn bench_parse(c: &mut Criterion) {
    let ntis = ntis_sample(15);
    let smtech = smtech_sample(15);
    let koita = koita_sample(10);

    c.bench_function("ntis_page", |b| {
        b.iter(|| {
            let doc = Html::parse_document(black_box(&ntis));
            black_box(specs::ntis::parse_doc(&doc).map(|v| v.len()))
        })
    });

    c.bench_function("smtech_page", |b| {
        b.iter(|| {
            let doc = Html::parse_document(black_box(&smtech));
            black_box(specs::smtech::parse_doc(&doc).map(|v| v.len()))
        })
    });

    c.bench_function("koita_post_numbers", |b| {
        b.iter(|| {
            let doc = Html::parse_document(black_box(&koita));
            let n = specs::koita::rows(&doc)
                .map(|rows| rows.into_iter().filter_map(specs::koita::post_no).count());
            black_box(n)
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
