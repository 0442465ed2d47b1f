use async_trait::async_trait;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use link_card::{
    extract_video_id, is_video_url, LinkPreviewer, MetadataExtractor, PageFetcher, PreviewError,
};
use std::time::Duration;
use tokio::runtime::Runtime;

const MOCK_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Test Page</title>
    <meta name="description" content="Test Description">
    <meta property="og:image" content="https://example.com/image.jpg">
    <link rel="icon" href="https://example.com/favicon.ico">
</head>
<body>
    <h1>Test Content</h1>
</body>
</html>"#;

const VIDEO_URLS: [&str; 4] = [
    "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
    "https://youtu.be/dQw4w9WgXcQ",
    "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1",
    "https://www.youtube.com/channel/UC38IQsAvIsxxjztdMZQtwHA",
];

struct InMemoryPage;

#[async_trait]
impl PageFetcher for InMemoryPage {
    async fn fetch_page(&self, _url: &str) -> Result<String, PreviewError> {
        Ok(MOCK_HTML.to_string())
    }
}

fn bench_classifier(c: &mut Criterion) {
    let mut group = c.benchmark_group("classifier");

    group.bench_function("is_video_url", |b| {
        b.iter(|| {
            for url in VIDEO_URLS {
                black_box(is_video_url(black_box(url)));
            }
        });
    });

    group.bench_function("extract_video_id", |b| {
        b.iter(|| {
            for url in VIDEO_URLS {
                black_box(extract_video_id(black_box(url)));
            }
        });
    });

    group.finish();
}

fn bench_single_preview(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let previewer = LinkPreviewer::new_with_fetcher(InMemoryPage);
    let extractor = MetadataExtractor::new();

    let mut group = c.benchmark_group("link_card");

    group
        .sample_size(50)
        .measurement_time(Duration::from_secs(10))
        .warm_up_time(Duration::from_secs(3));

    group.bench_function("extract_generic", |b| {
        b.iter(|| black_box(extractor.extract(black_box(MOCK_HTML), "https://www.example.com/")));
    });

    group.bench_function("resolve_generic", |b| {
        b.to_async(&rt).iter(|| async {
            black_box(
                previewer
                    .resolve("https://www.example.com/page")
                    .await
                    .unwrap(),
            )
        });
    });

    group.bench_function("resolve_video", |b| {
        b.to_async(&rt).iter(|| async {
            black_box(
                previewer
                    .resolve("https://youtu.be/dQw4w9WgXcQ")
                    .await
                    .unwrap(),
            )
        });
    });

    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(10));
    targets = bench_classifier, bench_single_preview
);
criterion_main!(benches);
