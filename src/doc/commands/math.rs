/*!
# `SUM <number> <number>`
Also `DIVIDE`, `MULTIPLY` and `MODULO`.

## Purpose
Whole number arithmetic.

## Remarks
`DIVIDE` discards the remainder. Dividing by zero is a
`DIVISION BY ZERO` error, and results too large to hold are an
`OVERFLOW` error.

## Example
```text
1 PRINTNUM DIVIDE 7 2
2 PRINT " "
3 PRINTNUM MODULO 7 2
4 END
RUN
3 1
```

*/
