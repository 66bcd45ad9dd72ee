/*!
# `PRINTNUM <number>`

## Purpose
Print a number without a line ending.

## Example
```text
1 PRINTNUM MULTIPLY 6 7
2 END
RUN
42
```

*/
