/*!
# `INCREMENT <variable>`
Also `DECREMENT <variable>`.

## Purpose
Add or subtract one.

## Remarks
The variable must have been reserved. It becomes a number afterwards,
whatever it held before; a variable that was not a number counts from 0.

## Example
```text
1 RESERVE X _ NUMBER
2 INCREMENT X
3 INCREMENT X
4 DECREMENT X
5 PRINTNUM X
6 END
RUN
1
```

*/
