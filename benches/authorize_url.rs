// SPDX-License-Identifier: MIT

//! Benchmarks for authorization-URL construction and scope parsing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strava_client::oauth::{authorize_url, OAuthConfig, Prompt, Scope};

fn bench_authorize_url(c: &mut Criterion) {
    let config = OAuthConfig::new(
        "42",
        "s",
        "https://app.example/cb",
        [Scope::Read, Scope::ActivityRead, Scope::ActivityWrite],
    )
    .expect("valid config");

    c.bench_function("authorize_url", |b| {
        b.iter(|| authorize_url(black_box(&config), black_box("state-nonce"), Prompt::Auto))
    });
}

fn bench_scope_parse(c: &mut Criterion) {
    let wire = "read,read_all,profile:read_all,profile:write,activity:read,activity:read_all,activity:write";

    c.bench_function("scope_parse_list", |b| {
        b.iter(|| Scope::parse_list(black_box(wire)))
    });
}

criterion_group!(benches, bench_authorize_url, bench_scope_parse);
criterion_main!(benches);
