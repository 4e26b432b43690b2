use super::group::Group;

// Dancing-links exact cover (Knuth's Algorithm X). Nodes live in a single
// arena and link to each other by index, so cover/uncover is plain integer
// relinking with no pointer juggling.
//
// Columns are tile slots of the hand, rows are candidate groups. Every
// solution is a set of rows covering each column exactly once.

#[derive(Debug, Clone, Copy)]
struct Node {
    left: usize,
    right: usize,
    up: usize,
    down: usize,
    col: usize,   // header index for cell nodes
    row: usize,   // row id for cell nodes, column size for headers
}

#[derive(Debug)]
struct Matrix {
    nodes: Vec<Node>,
}

const ROOT: usize = 0;

impl Matrix {
    // headers occupy indices 1..=n_cols, the root is index 0
    fn new(n_cols: usize) -> Self {
        let mut nodes = Vec::with_capacity(n_cols + 1);
        for i in 0..=n_cols {
            nodes.push(Node {
                left: (i + n_cols) % (n_cols + 1),
                right: (i + 1) % (n_cols + 1),
                up: i,
                down: i,
                col: i,
                row: 0,
            });
        }
        Self { nodes }
    }

    // `cols` must be strictly increasing, columns are 0-based
    fn add_row(&mut self, row: usize, cols: &[usize]) {
        let first = self.nodes.len();
        for (k, &c) in cols.iter().enumerate() {
            let header = c + 1;
            let idx = self.nodes.len();
            let up = self.nodes[header].up;
            self.nodes.push(Node {
                left: if k == 0 { idx } else { idx - 1 },
                right: if k == 0 { idx } else { first },
                up,
                down: header,
                col: header,
                row,
            });
            self.nodes[up].down = idx;
            self.nodes[header].up = idx;
            self.nodes[header].row += 1; // column size
            if k > 0 {
                self.nodes[idx - 1].right = idx;
                self.nodes[first].left = idx;
            }
        }
    }

    // unlink a column header and every row that uses the column
    fn cover(&mut self, header: usize) {
        let (l, r) = (self.nodes[header].left, self.nodes[header].right);
        self.nodes[l].right = r;
        self.nodes[r].left = l;
        let mut i = self.nodes[header].down;
        while i != header {
            let mut j = self.nodes[i].right;
            while j != i {
                let (u, d, c) = (self.nodes[j].up, self.nodes[j].down, self.nodes[j].col);
                self.nodes[u].down = d;
                self.nodes[d].up = u;
                self.nodes[c].row -= 1;
                j = self.nodes[j].right;
            }
            i = self.nodes[i].down;
        }
    }

    // exact inverse of cover, in reverse order
    fn uncover(&mut self, header: usize) {
        let mut i = self.nodes[header].up;
        while i != header {
            let mut j = self.nodes[i].left;
            while j != i {
                let (u, d, c) = (self.nodes[j].up, self.nodes[j].down, self.nodes[j].col);
                self.nodes[u].down = j;
                self.nodes[d].up = j;
                self.nodes[c].row += 1;
                j = self.nodes[j].left;
            }
            i = self.nodes[i].up;
        }
        let (l, r) = (self.nodes[header].left, self.nodes[header].right);
        self.nodes[l].right = header;
        self.nodes[r].left = header;
    }

    // active column with the fewest rows, leftmost on ties
    fn min_column(&self) -> Option<usize> {
        let mut best = None;
        let mut size = usize::MAX;
        let mut h = self.nodes[ROOT].right;
        while h != ROOT {
            if self.nodes[h].row < size {
                size = self.nodes[h].row;
                best = Some(h);
            }
            h = self.nodes[h].right;
        }
        best
    }

    fn search(&mut self, partial: &mut Vec<usize>, solutions: &mut Vec<Vec<usize>>) {
        let header = match self.min_column() {
            Some(h) => h,
            None => {
                // no columns left, the partial cover is complete
                let mut rows = partial.clone();
                rows.sort_unstable();
                solutions.push(rows);
                return;
            }
        };
        if self.nodes[header].row == 0 {
            return;
        }
        self.cover(header);
        let mut i = self.nodes[header].down;
        while i != header {
            partial.push(self.nodes[i].row);
            let mut j = self.nodes[i].right;
            while j != i {
                self.cover(self.nodes[j].col);
                j = self.nodes[j].right;
            }
            self.search(partial, solutions);
            let mut j = self.nodes[i].left;
            while j != i {
                self.uncover(self.nodes[j].col);
                j = self.nodes[j].left;
            }
            partial.pop();
            i = self.nodes[i].down;
        }
        self.uncover(header);
    }
}

// All exact covers of the slots 0..n_slots by the given groups. Each
// solution is a sorted list of indices into `groups`.
pub fn find_exact_covers(groups: &[Group], n_slots: usize) -> Vec<Vec<usize>> {
    let mut matrix = Matrix::new(n_slots);
    for (row, group) in groups.iter().enumerate() {
        matrix.add_row(row, &group.indices);
    }
    let mut solutions = vec![];
    matrix.search(&mut vec![], &mut solutions);
    solutions
}

#[cfg(test)]
fn cover_rows(rows: &[&[usize]]) -> Vec<Vec<usize>> {
    use super::group::GroupKind;
    let n_slots = rows.iter().flat_map(|r| r.iter()).max().map_or(0, |&m| m + 1);
    let groups: Vec<Group> = rows
        .iter()
        .map(|r| Group {
            kind: GroupKind::Pair,
            indices: r.to_vec(),
        })
        .collect();
    find_exact_covers(&groups, n_slots)
}

#[test]
fn test_knuth_example() {
    // the 6x7 matrix from Knuth's paper, unique solution {row 1, 3, 5}
    let solutions = cover_rows(&[
        &[2, 4, 5],
        &[0, 3, 6],
        &[1, 2, 5],
        &[0, 3],
        &[1, 6],
        &[3, 4, 6],
    ]);
    assert_eq!(solutions, vec![vec![0, 3, 4]]);
}

#[test]
fn test_all_covers_found() {
    // slots 0..4 coverable two ways
    let solutions = cover_rows(&[&[0, 1], &[2, 3], &[0, 2], &[1, 3], &[0, 3]]);
    assert_eq!(solutions.len(), 2);
    assert!(solutions.contains(&vec![0, 1]));
    assert!(solutions.contains(&vec![2, 3]));
}

#[test]
fn test_no_cover() {
    let solutions = cover_rows(&[&[0, 1], &[1, 2]]);
    assert!(solutions.is_empty());
}

#[test]
fn test_empty_universe() {
    // zero columns are trivially covered by selecting nothing
    assert_eq!(find_exact_covers(&[], 0), vec![Vec::<usize>::new()]);
}
