use crate::models::Movie;

/// Sets `ranking = position + 1` over movies already sorted by rating.
///
/// Ranks are dense and distinct, equal ratings included. Returns `(id, ranking)` for
/// every movie whose stored ranking changed, so only those need writing back.
pub fn assign_ranks(movies: &mut [Movie]) -> Vec<(i32, i32)> {
    let mut changed = Vec::new();
    for (pos, movie) in movies.iter_mut().enumerate() {
        let rank = pos as i32 + 1;
        if movie.ranking != Some(rank) {
            movie.ranking = Some(rank);
            changed.push((movie.id, rank));
        }
    }
    changed
}
