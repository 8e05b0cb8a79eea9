//! The closed set of supported algorithms and their static reference data

use super::errors::SortError;
use std::fmt;
use std::str::FromStr;

/// Identifier for one of the instrumented sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Quick,
    Merge,
    Heap,
    Shell,
    Counting,
    Radix,
    Tim,
}

/// Display name, complexity labels and pseudocode for an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub pseudocode: &'static str,
}

impl Algorithm {
    /// Every algorithm, in menu order
    pub const ALL: [Algorithm; 10] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Heap,
        Algorithm::Radix,
        Algorithm::Counting,
        Algorithm::Shell,
        Algorithm::Tim,
    ];

    fn menu_index(self) -> usize {
        Self::ALL.iter().position(|a| *a == self).unwrap_or(0)
    }

    /// Next algorithm in menu order, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.menu_index() + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in menu order, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.menu_index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Whether the algorithm only orders elements through comparisons
    pub fn is_comparison_based(self) -> bool {
        !matches!(self, Algorithm::Counting | Algorithm::Radix)
    }

    /// Static reference data for this algorithm
    pub fn info(self) -> &'static AlgorithmInfo {
        match self {
            Algorithm::Bubble => &BUBBLE_INFO,
            Algorithm::Selection => &SELECTION_INFO,
            Algorithm::Insertion => &INSERTION_INFO,
            Algorithm::Quick => &QUICK_INFO,
            Algorithm::Merge => &MERGE_INFO,
            Algorithm::Heap => &HEAP_INFO,
            Algorithm::Shell => &SHELL_INFO,
            Algorithm::Counting => &COUNTING_INFO,
            Algorithm::Radix => &RADIX_INFO,
            Algorithm::Tim => &TIM_INFO,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Accepts short ids (`quick`), kebab/snake ids (`quick-sort`) and
    /// display names (`Quick Sort`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        let key = key.strip_suffix("sort").unwrap_or(&key);

        match key {
            "bubble" => Ok(Algorithm::Bubble),
            "selection" => Ok(Algorithm::Selection),
            "insertion" => Ok(Algorithm::Insertion),
            "quick" => Ok(Algorithm::Quick),
            "merge" => Ok(Algorithm::Merge),
            "heap" => Ok(Algorithm::Heap),
            "shell" => Ok(Algorithm::Shell),
            "counting" => Ok(Algorithm::Counting),
            "radix" => Ok(Algorithm::Radix),
            "tim" => Ok(Algorithm::Tim),
            _ => Err(SortError::UnknownAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

const BUBBLE_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Bubble Sort",
    time_complexity: "O(n²)",
    space_complexity: "O(1)",
    pseudocode: "procedure bubbleSort(A : list of sortable items)
    n := length(A)
    for i := 0 to n - 1 do
        for j := 0 to n - i - 2 do
            if A[j] > A[j+1] then
                swap(A[j], A[j+1])
            end if
        end for
        mark A[n-i-1] as sorted
    end for
end procedure",
};

const SELECTION_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Selection Sort",
    time_complexity: "O(n²)",
    space_complexity: "O(1)",
    pseudocode: "procedure selectionSort(A : list of sortable items)
    n := length(A)
    for i := 0 to n - 1 do
        minIdx := i
        for j := i + 1 to n - 1 do
            if A[j] < A[minIdx] then
                minIdx := j
            end if
        end for
        if minIdx != i then
            swap(A[i], A[minIdx])
        end if
    end for
end procedure",
};

const INSERTION_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Insertion Sort",
    time_complexity: "O(n²)",
    space_complexity: "O(1)",
    pseudocode: "procedure insertionSort(A : list of sortable items)
    i := 1
    while i < length(A)
        j := i
        while j > 0 and A[j-1] > A[j]
            swap(A[j], A[j-1])
            j := j - 1
        end while
        i := i + 1
    end while
end procedure",
};

const QUICK_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Quick Sort",
    time_complexity: "O(n log n)",
    space_complexity: "O(log n)",
    pseudocode: "algorithm quicksort(A, lo, hi) is
    if lo >= hi then return
    p := partition(A, lo, hi)
    quicksort(A, lo, p - 1)
    quicksort(A, p + 1, hi)

algorithm partition(A, lo, hi) is
    pivot := A[hi]
    i := lo
    for j := lo to hi - 1 do
        if A[j] < pivot then
            swap A[i] with A[j]
            i := i + 1
    swap A[i] with A[hi]
    return i",
};

const MERGE_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Merge Sort",
    time_complexity: "O(n log n)",
    space_complexity: "O(n)",
    pseudocode: "procedure mergeSort(A, lo, hi)
    if lo >= hi return
    mid := (lo + hi) / 2
    mergeSort(A, lo, mid)
    mergeSort(A, mid + 1, hi)
    merge(A, lo, mid, hi)
end procedure

procedure merge(A, lo, mid, hi)
    L := A[lo..mid], R := A[mid+1..hi]
    k := lo
    while L and R not empty do
        if L.first <= R.first then
            A[k] := L.pop()
        else
            A[k] := R.pop()
        k := k + 1
    copy remaining L, then R, into A[k..]
end procedure",
};

const HEAP_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Heap Sort",
    time_complexity: "O(n log n)",
    space_complexity: "O(1)",
    pseudocode: "procedure heapSort(A)
    buildMaxHeap(A)
    for i from length(A) - 1 down to 1 do
        swap(A[0], A[i])
        heapSize := heapSize - 1
        maxHeapify(A, 0)
    end for
end procedure",
};

const SHELL_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Shell Sort",
    time_complexity: "O(n log n)",
    space_complexity: "O(1)",
    pseudocode: "procedure shellSort(A)
    n := length(A)
    gap := n/2
    while gap > 0 do
        for i := gap to n-1 do
            temp := A[i]
            j := i
            while j >= gap and A[j - gap] > temp do
                A[j] := A[j - gap]
                j := j - gap
            end while
            A[j] := temp
        end for
        gap := gap / 2
    end while
end procedure",
};

const COUNTING_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Counting Sort",
    time_complexity: "O(n+k)",
    space_complexity: "O(k)",
    pseudocode: "procedure countingSort(A)
    max := findMax(A)
    count := array of size max + 1

    for each x in A do
        count[x]++

    k := 0
    for v from 0 to max do
        while count[v] > 0 do
            A[k] := v
            count[v]--
            k := k + 1
        end while
    end for
end procedure",
};

const RADIX_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Radix Sort",
    time_complexity: "O(nk)",
    space_complexity: "O(n+k)",
    pseudocode: "procedure radixSort(A)
    m := getMax(A)
    exp := 1
    while m / exp > 0 do
        countingSortByDigit(A, exp)
        exp := exp * 10
    end while
end procedure",
};

const TIM_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Tim Sort",
    time_complexity: "O(n log n)",
    space_complexity: "O(n)",
    pseudocode: "procedure timSort(A)
    n := length(A)
    RUN := 4
    for i from 0 to n by RUN do
        insertionSort(A, i, min(i + RUN - 1, n - 1))

    size := RUN
    while size < n do
        for left from 0 to n by 2*size do
            mid := left + size - 1
            right := min(left + 2*size - 1, n - 1)
            merge(A, left, mid, right)
        end for
        size := 2 * size
    end while
end procedure",
};
