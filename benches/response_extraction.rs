use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use prospect_finder::pipeline::interpret;
use prospect_finder::retrieval::RawCitation;
use serde_json::json;

/// Generate a fenced model answer holding `num_records` prospects
fn generate_response(num_records: usize) -> String {
    let records: Vec<_> = (0..num_records)
        .map(|i| {
            let phone = if i % 3 == 0 { "N/A".to_string() } else { format!("410-555-{:04}", i) };
            let email = if i % 2 == 0 { "" } else { "Not Found" };
            json!({
                "name": format!("Facility {}", i),
                "phone": phone,
                "email": email,
                "address": format!("{} Industrial Pkwy", i),
                "city": "Baltimore",
                "state": "MD",
                "zip": 21201 + (i % 30),
                "notes": "Manufacturing plant; Water Treatment (cooling towers)"
            })
        })
        .collect();

    format!(
        "Here is what I found in the area:\n```json\n{}\n```\nAll entries were verified.",
        serde_json::Value::Array(records)
    )
}

fn generate_citations(count: usize) -> Vec<RawCitation> {
    (0..count)
        .map(|i| {
            if i % 2 == 0 {
                RawCitation::maps(Some("Facility"), &format!("https://maps.google.com/?cid={}", i))
            } else {
                RawCitation::web(None, &format!("https://example.com/{}", i))
            }
        })
        .collect()
}

fn bench_interpret(c: &mut Criterion) {
    let mut group = c.benchmark_group("response_extraction");

    for size in [20, 200, 2_000].iter() {
        let text = generate_response(*size);
        let citations = generate_citations(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("interpret", size), size, |b, _| {
            b.iter(|| interpret(black_box(&text), black_box(&citations)).unwrap());
        });
    }

    // Failure path: prose only, no payload to isolate
    let prose = "No structured data could be produced for this territory. ".repeat(200);
    let citations = generate_citations(20);
    group.bench_function("unsynthesized", |b| {
        b.iter(|| interpret(black_box(&prose), black_box(&citations)).unwrap_err());
    });

    group.finish();
}

criterion_group!(benches, bench_interpret);
criterion_main!(benches);
