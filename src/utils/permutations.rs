use log::debug;

/// All orderings of `0..n` in lexicographic order.
///
/// This uses an explicit stack instead of recursion; children are pushed in
/// reverse so they pop in ascending order.
pub fn index_permutations(n: usize) -> Vec<Vec<usize>> {
    debug!("Generating permutations of {} indices", n);

    let mut result = Vec::new();

    let mut stack = vec![Vec::with_capacity(n)];

    while let Some(prefix) = stack.pop() {
        if prefix.len() == n {
            result.push(prefix);
            continue;
        }

        for next in (0..n).rev() {
            if prefix.contains(&next) {
                continue;
            }
            let mut extended = prefix.clone();
            extended.push(next);
            stack.push(extended);
        }
    }

    debug!("Generated {} permutations", result.len());
    result
}
