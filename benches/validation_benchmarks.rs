use criterion::{Criterion, criterion_group, criterion_main};
use formguard::prelude::*;
use formguard::{FileTypes, IsEmail, Password, RuleSet};
use std::hint::black_box;

#[derive(Record)]
#[validate(rename_all = "PascalCase")]
struct Signup {
    #[validate("required,max=30,email")]
    email: String,
    #[validate("required,min=3,max=20")]
    username: String,
    #[validate("required,confirm=Password")]
    confirm: String,
    #[validate("required,min=7,max=30,password")]
    password: String,
}

#[derive(Record)]
#[validate(rename_all = "PascalCase")]
struct Gallery {
    #[validate("required,gt=0,dive,file_required,file_types=image/png;image/jpeg;image/webp")]
    previews: Vec<Option<FileHandle>>,
}

fn bench_rule_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_parsing");

    group.bench_function("simple", |b| {
        b.iter(|| RuleSet::parse(black_box("required,min=7,max=30,password")))
    });

    group.bench_function("dive", |b| {
        b.iter(|| {
            RuleSet::parse(black_box(
                "required,gt=0,dive,file_required,file_types=image/png;image/jpeg;image/jpg;image/webp",
            ))
        })
    });

    group.finish();
}

fn bench_string_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_rules");

    let emails = ["user@example.com", "test.user+tag@domain.co.uk", "invalid-email"];
    group.bench_function("email", |b| {
        b.iter(|| {
            for email in &emails {
                let _ = IsEmail::validate(&FieldValue::Str(black_box(email)), "Email");
            }
        })
    });

    group.bench_function("password", |b| {
        b.iter(|| Password::validate(&FieldValue::Str(black_box("Correct1!Horse")), "Password"))
    });

    group.finish();
}

fn bench_file_types(c: &mut Criterion) {
    let rule = FileTypes::parse("image/png;image/jpeg;image/jpg;image/webp");
    let by_type = FileHandle::new("a.bin", 10).with_content_type("image/webp");
    let by_extension = FileHandle::new("a.jpg", 10);

    c.bench_function("file_types_accepts", |b| {
        b.iter(|| {
            black_box(rule.accepts(black_box(&by_type)));
            black_box(rule.accepts(black_box(&by_extension)));
        })
    });
}

fn bench_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("records");

    let signup = Signup {
        email: "reader@example.com".to_string(),
        username: "reader".to_string(),
        confirm: "Secret12!".to_string(),
        password: "Secret12!".to_string(),
    };
    group.bench_function("signup_valid", |b| b.iter(|| validate(black_box(&signup))));

    let invalid = Signup {
        email: "nope".to_string(),
        username: "r".to_string(),
        confirm: "x".to_string(),
        password: "short".to_string(),
    };
    group.bench_function("signup_invalid", |b| b.iter(|| validate(black_box(&invalid))));

    let gallery = Gallery {
        previews: (0..32)
            .map(|i| {
                (i % 8 != 0).then(|| FileHandle::new(format!("p{}.png", i), 100).with_content_type("image/png"))
            })
            .collect(),
    };
    group.bench_function("gallery_dive_32", |b| b.iter(|| validate(black_box(&gallery))));

    group.finish();
}

criterion_group!(
    benches,
    bench_rule_parsing,
    bench_string_rules,
    bench_file_types,
    bench_records
);
criterion_main!(benches);
