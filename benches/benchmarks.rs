// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gtrending::{
    DeveloperExtractor, DeveloperSelectors, RepositoryExtractor, RepositorySelectors,
    extract_developers, extract_repositories,
};

const REPOSITORIES_PAGE: &str = include_str!("../tests/fixtures/trending_repositories.html");
const DEVELOPERS_PAGE: &str = include_str!("../tests/fixtures/trending_developers.html");

fn large_repositories_page(entries: usize,) -> String
{
    let start = REPOSITORIES_PAGE.find("<li",).expect("fixture has entries",);
    let end = REPOSITORIES_PAGE.rfind("</li>",).expect("fixture has entries",) + "</li>".len();
    let items = &REPOSITORIES_PAGE[start..end];

    let mut page = String::from("<html><body><ol class=\"repo-list\">",);
    for _ in 0..entries {
        page.push_str(items,);
    }
    page.push_str("</ol></body></html>",);
    page
}

fn benchmark_repositories_fixture(c: &mut Criterion,)
{
    c.bench_function("extract_repositories_fixture", |b| {
        b.iter(|| extract_repositories(black_box(REPOSITORIES_PAGE,),).expect("extract failed",),)
    },);
}

fn benchmark_developers_fixture(c: &mut Criterion,)
{
    c.bench_function("extract_developers_fixture", |b| {
        b.iter(|| extract_developers(black_box(DEVELOPERS_PAGE,),).expect("extract failed",),)
    },);
}

fn benchmark_precompiled_extractors(c: &mut Criterion,)
{
    let repositories =
        RepositoryExtractor::new(&RepositorySelectors::default(),).expect("selectors compile",);
    let developers =
        DeveloperExtractor::new(&DeveloperSelectors::default(),).expect("selectors compile",);

    c.bench_function("extract_with_compiled_selectors", |b| {
        b.iter(|| {
            let repos = repositories.extract(black_box(REPOSITORIES_PAGE,),).expect("extract failed",);
            let devs = developers.extract(black_box(DEVELOPERS_PAGE,),).expect("extract failed",);
            black_box((repos.len(), devs.len(),),)
        },)
    },);
}

fn benchmark_large_page(c: &mut Criterion,)
{
    let page = large_repositories_page(25,);
    let extractor =
        RepositoryExtractor::new(&RepositorySelectors::default(),).expect("selectors compile",);

    c.bench_function("extract_75_repositories", |b| {
        b.iter(|| extractor.extract(black_box(&page,),).expect("extract failed",),)
    },);
}

criterion_group!(
    benches,
    benchmark_repositories_fixture,
    benchmark_developers_fixture,
    benchmark_precompiled_extractors,
    benchmark_large_page
);
criterion_main!(benches);
