// Rust guideline compliant 2026-10-15

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ofp_core::{resolve, resolve_exact, AuthorisationServer, Participant};

const WORDS: [&str; 8] = [
    "alpha", "beta", "inter", "pagamentos", "credito", "seguros", "digital", "brasil",
];

fn build_participants(count: usize) -> Vec<Participant> {
    (0..count)
        .map(|i| {
            let name = format!(
                "Banco {} {} {}",
                WORDS[i % WORDS.len()],
                WORDS[(i / WORDS.len()) % WORDS.len()],
                i
            );
            Participant {
                organisation_id: Some(format!("org-{:05}", i)),
                organisation_name: Some(name.clone()),
                legal_entity_name: Some(format!("{} S.A.", name.to_uppercase())),
                registration_number: Some(format!("{:014}", i)),
                registration_id: Some(format!("{:08}", i)),
                authorisation_servers: vec![AuthorisationServer {
                    authorisation_server_id: Some(format!("srv-{:05}", i)),
                    customer_friendly_description: Some(format!("Open Finance {}", name)),
                    ..AuthorisationServer::default()
                }],
                ..Participant::default()
            }
        })
        .collect()
}

fn bench_exact_by_id(c: &mut Criterion) {
    let participants = build_participants(1000);
    c.bench_function("resolve_exact_id_1000", |b| {
        b.iter(|| black_box(resolve_exact(&participants, black_box("org-00999"))))
    });
}

fn bench_exact_by_server_id(c: &mut Criterion) {
    let participants = build_participants(1000);
    c.bench_function("resolve_exact_server_1000", |b| {
        b.iter(|| black_box(resolve_exact(&participants, black_box("srv-00999"))))
    });
}

fn bench_fuzzy_fallback(c: &mut Criterion) {
    let participants = build_participants(1000);
    c.bench_function("resolve_fuzzy_1000", |b| {
        b.iter(|| black_box(resolve(&participants, black_box("banc intr pagamento"))))
    });
}

criterion_group!(
    benches,
    bench_exact_by_id,
    bench_exact_by_server_id,
    bench_fuzzy_fallback
);
criterion_main!(benches);
