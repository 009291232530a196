//! Performance benchmarks for qbit-client
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - List parameter joining
//! - Form and multipart parameter encoding
//! - Full request round trips against a local mock daemon

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use qbit_client::api::encode::{encode_add, encode_info_query, Separator};
use qbit_client::api::types::{TorrentAddParameters, TorrentFilter, TorrentInfoParameters};
use qbit_client::{QbitClient, TorrentFile, ValueList};

fn create_runtime() -> Runtime {
    tokio::runtime::Runtime::new().unwrap()
}

fn hashes(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{:040x}", i)).collect()
}

fn bench_value_list_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_list_join");

    for size in [1, 100, 10000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        let list = ValueList::from(hashes(*size));

        group.bench_with_input(BenchmarkId::new("pipe", size), &list, |b, list| {
            b.iter(|| black_box(list.join(Separator::Pipe)));
        });
        group.bench_with_input(BenchmarkId::new("newline", size), &list, |b, list| {
            b.iter(|| black_box(list.join(Separator::Newline)));
        });
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    group.bench_function("info_query", |b| {
        b.iter(|| {
            let query = TorrentInfoParameters {
                filter: Some(TorrentFilter::Downloading),
                category: Some("tv shows & movies".to_string()),
                tag: Some("hd/1080p".to_string()),
                sort: Some("added_on".to_string()),
                reverse: Some(true),
                limit: Some(50),
                hashes: Some(hashes(20).into()),
                ..Default::default()
            };
            let params = encode_info_query(&query);
            black_box(params.form_pairs().len())
        });
    });

    let torrent = vec![0u8; 256 * 1024];
    group.throughput(Throughput::Bytes(torrent.len() as u64));
    group.bench_function("add_multipart", |b| {
        b.iter(|| {
            let params = TorrentAddParameters {
                urls: Some(vec!["magnet:?xt=urn:btih:abc", "http://host/a.torrent"].into()),
                torrents: vec![TorrentFile::new("a.torrent", torrent.clone())],
                tags: Some(vec!["a", "b"].into()),
                paused: Some(true),
                ..Default::default()
            };
            black_box(encode_add(params.into()).into_multipart().unwrap())
        });
    });

    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    let rt = create_runtime();
    let (server, client) = rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v2/auth/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .append_header("set-cookie", "SID=bench; path=/")
                    .set_body_string("Ok."),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v2/torrents/pause"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v2/app/version"))
            .respond_with(ResponseTemplate::new(200).set_body_string("v4.6.2"))
            .mount(&server)
            .await;
        let client = QbitClient::new(&server.uri()).unwrap();
        client.auth().login().await.unwrap();
        (server, client)
    });

    let mut group = c.benchmark_group("round_trip");
    group.bench_function("app_version", |b| {
        b.to_async(&rt)
            .iter(|| async { black_box(client.app().version().await.unwrap()) });
    });
    group.bench_function("pause_100", |b| {
        let list = hashes(100);
        b.to_async(&rt)
            .iter(|| async { client.torrents().pause(&list).await.unwrap() });
    });
    group.finish();

    drop(server);
}

criterion_group!(benches, bench_value_list_join, bench_encode, bench_round_trip);
criterion_main!(benches);
