use criterion::{Criterion, criterion_group, criterion_main};
use nearwords::{NearestMatcher, Vocabulary};

// synthetic vocabulary so the bench needs no data file
fn build_vocabulary() -> Vocabulary {
    let onsets = ["b", "c", "d", "f", "g", "h", "l", "m", "p", "r", "s", "t"];
    let nuclei = ["a", "e", "i", "o", "u"];
    let codas = ["n", "r", "t", "ll", "st", "ng", "ck", "mp"];

    let mut words = Vec::new();
    for a in onsets {
        for b in nuclei {
            for c in codas {
                for d in nuclei {
                    for e in codas {
                        words.push(format!("{}{}{}{}{}", a, b, c, d, e));
                    }
                }
            }
        }
    }
    Vocabulary::new(words)
}

fn bench_find_nearest(c: &mut Criterion) {
    let vocabulary = build_vocabulary();
    let matcher = NearestMatcher::new();
    let misspellings = ["bancek", "tollang", "sertimp", "gickust", "marral"];

    c.bench_function("find_nearest_trigrams", |b| {
        b.iter(|| {
            for word in misspellings {
                let _ = matcher.find_nearest(word, 3, &vocabulary, 3);
            }
        })
    });
}

criterion_group!(benches, bench_find_nearest);
criterion_main!(benches);
