use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shirabe_core::parser::Classifier;

fn bench_classify(c: &mut Criterion) {
    let classifier = Classifier::default().unwrap();

    let inputs = vec![
        "[北宇治字幕组] 吹响吧！上低音号 第三季 / Hibike! Euphonium 3 [07][WebRip][HEVC_AAC][简繁日内封][招募时轴]",
        "[ANi] 吹響吧！上低音號 第三季（僅限港澳台地區） - 07 [1080P][Bilibili][WEB-DL][AAC AVC][CHT CHS][MP4]",
        "[桜都字幕組] 無職轉生～到了異世界就拿出真本事～ S2 [18][1080p@60FPS][繁體內嵌]",
        "[VCB-Studio] 剧场版 紫罗兰永恒花园 / Gekijouban Violet Evergarden 10-bit 2160p/1080p HEVC BDRip [MOVIE]",
        "吹响吧！上低音号 全两季+Movie Hibike! Euphonium S1+S2+SP+Moviex4 [BD 1920x1080 HEVC-10bit OPUS][简繁内封字幕]",
    ];

    c.bench_function("classify_single", |b| {
        b.iter(|| classifier.classify(black_box(inputs[0])));
    });

    c.bench_function("classify_batch_5", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = classifier.classify(black_box(input));
            }
        });
    });

    let long_title = "[组] ".repeat(500) + "[01]";
    c.bench_function("classify_pathological", |b| {
        b.iter(|| classifier.classify(black_box(&long_title)));
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
