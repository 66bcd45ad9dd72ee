/*!
# `ASKFOR <type> <text>`

## Purpose
Show a prompt and read one line from the user as a value of `<type>`.

## Remarks
Only `TEXT` and `NUMBER` can be asked for. Any other type is a
`CAN'T USE TYPE` error. A `NUMBER` answer that is not a whole number is a
`FAILED TO CONVERT TO NUMBER` error.

## Example
```text
1 RESERVE AGE _ NUMBER
2 AGE IS ASKFOR NUMBER "How old are you?"
3 PRINTNUM SUM AGE 1
4 END
```

*/
