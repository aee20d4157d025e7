/*!

This is the long-form manual for `likert_summary` and `fbchart`.

## Input formats

The following formats are supported:
* `csv` Comma Separated Values, decoded as UTF-8
* `excel` Spreadsheets in the `.xlsx` or `.xls` formats

In both cases the first row holds the column names and every following row is
one response. The format is normally inferred from the file extension; the
`--input-type` flag overrides the inference. For spreadsheets, the first
worksheet is used unless `--excel-worksheet-name` names another one.

Cell values are treated as opaque strings. Only the four literals below are
counted; every other value (blanks included) is dropped silently and counts
toward no question's total:

| Response                 | Category          | Sentiment |
|--------------------------|-------------------|-----------|
| `Strongly Agree ✅`      | Strongly Agree    | Positive  |
| `Agree ✋🏻`              | Agree             | Positive  |
| `Disagree ⚠️`            | Disagree          | Negative  |
| `Strongly Disagree ⛔️`  | Strongly Disagree | Negative  |

## Output

The output is a Vega-Lite bar specification in JSON. The dataset rows carry
the fields `criterion` (the numbered, shortened question label), `category`,
`sentiment`, `count`, `total`, `percentage` and `divergingPercentage`. For
each question, the counts sum to `total` and the percentages to 1; the
diverging percentage is the percentage with its sign flipped for negative
sentiment, which is what lets the chart stack the two sentiments on either
side of a zero axis.

Question labels are numbered in selection order and truncated to 60
characters. The bar order on the axis is plain string order of these labels,
so with ten or more questions `10.` sorts before `2.`. This matches the
behavior of the spreadsheet tooling this program replaces.

## Checking an output against a reference

The `--reference` flag points to a JSON file with the expected output. After
the analysis, `fbchart` compares its result with the reference and fails with
a diff if they differ. This is mostly useful for regression testing pipelines
that consume the chart data.

*/
