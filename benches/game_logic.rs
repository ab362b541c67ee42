use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{Game, Snake};

fn bench_step(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.init();

    c.bench_function("game_step", |b| {
        b.iter(|| {
            game.step(black_box(0));
        })
    });
}

fn bench_grow(c: &mut Criterion) {
    c.bench_function("snake_grow_64", |b| {
        b.iter(|| {
            let mut snake = Snake::new();
            for _ in 0..64 {
                snake.grow();
            }
            black_box(snake.len())
        })
    });
}

fn bench_self_intersects(c: &mut Criterion) {
    let mut snake = Snake::new();
    for _ in 0..400 {
        snake.grow();
    }

    c.bench_function("self_intersects_len_404", |b| {
        b.iter(|| black_box(snake.self_intersects()))
    });
}

criterion_group!(benches, bench_step, bench_grow, bench_self_intersects);
criterion_main!(benches);
