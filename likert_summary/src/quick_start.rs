/*!

# Quick start with Google Forms

This example shows how to go from an online feedback form to a diverging
stacked-bar chart. It uses Google Forms because it is free to use and has a
large response limit. Other providers (Microsoft, Qualtrics) export the same
kind of spreadsheet.

**Collecting the feedback** Create a form with one **Multiple choice** question
per feedback criterion, all of them offering exactly the four responses below
(including the trailing symbols, which the aggregation matches literally):

```text
Strongly Agree ✅
Agree ✋🏻
Disagree ⚠️
Strongly Disagree ⛔️
```

Prefix the question titles with `👉` (or include the phrase
`Teacher-Specific Reflection`): `fbchart` uses these markers to guess which
columns are feedback questions, so you will not need to list them by hand.

**Getting the results** After the collection period, open the `Responses` tab
and use the `Create spreadsheet` option, then download the spreadsheet in the
**Excel format** (xlsx). A CSV export works the same way.

Run `fbchart` on the download (the file name may differ for you):

```bash
fbchart -i 'Course feedback (Responses).xlsx' --out chart.json
```

The program prints the selected columns in the log and writes `chart.json`, a
[Vega-Lite](https://vega.github.io/vega-lite/) specification. Render it with
any Vega-Lite viewer, for instance the [online editor](https://vega.github.io/editor/)
or `vl-convert`:

```bash
vl-convert vl2png --input chart.json --output chart.png
```

Positive responses stack rightward from the zero axis in greens, negative
responses leftward in reds, one bar per question, with the response count in
the title.

If the guessed columns are not the ones you want, list them explicitly:

```bash
fbchart -i 'Course feedback (Responses).xlsx' \
  --columns '👉 The course was well organized' \
  --columns '👉 I would recommend this course'
```

The order of the `--columns` flags controls the numbering of the chart
labels. Use `--list-columns` to see every column of the file with a mark on
the ones that look like feedback questions.

*/
